// src/logic/solitaire.rs
//! The move interpreter: table setup, move dispatch and win detection.

use log::{debug, info};

use crate::components::card::Card;
use crate::components::pile::{Pile, Rejected};
use crate::components::stack::StackType;
use crate::config::rules::{deal_count, DealConfig, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::{GameError, GameResult, Violation};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::create_shuffled_stock;
use crate::logic::rules::{check_win_condition, new_foundation, new_tableau_column, new_waste};
use crate::logic::stock;
use crate::protocol::TableView;
use crate::table::Table;

/// A single game: owns the table and applies the moves it is handed.
#[derive(Debug, Clone, Default)]
pub struct Solitaire {
    table: Table,
    config: DealConfig,
}

impl Solitaire {
    /// An empty, undealt table. Call [`Solitaire::setup`] before playing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DealConfig) -> Self {
        Self { table: Table::new(), config }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn view(&self) -> TableView {
        TableView::from(&self.table)
    }

    /// Deals a new game from a freshly shuffled deck.
    pub fn setup(&mut self) -> GameResult<()> {
        let deck = create_shuffled_stock(self.config.seed);
        self.setup_with_deck(deck)
    }

    /// Deals a new game from `deck`, drawing from its top. What is left of
    /// the deck becomes the stock.
    ///
    /// 1. One card to the waste, face-up.
    /// 2. Four empty foundations (ace first, then same suit ascending).
    /// 3. Four tableau columns of five cards, face-down except the top.
    ///
    /// Fails with [`GameError::Configuration`] if the deck runs out; the
    /// previous table is kept in that case.
    pub fn setup_with_deck(&mut self, mut deck: Pile) -> GameResult<()> {
        info!("Setting up table from a {}-card deck...", deck.len());

        let mut waste = new_waste();
        let mut first = draw(&mut deck, StackType::Waste)?;
        if first.is_face_down() {
            first.flip();
        }
        waste.push_forced(first);

        let foundations: Vec<Pile> = (0..FOUNDATION_COUNT).map(|_| new_foundation()).collect();

        let mut tableau = Vec::with_capacity(TABLEAU_COUNT);
        for i in 0..TABLEAU_COUNT {
            let mut column = new_tableau_column();
            for _ in 0..deal_count(i) {
                let mut card = draw(&mut deck, StackType::Tableau(i as u8))?;
                if card.is_face_up() {
                    card.flip();
                }
                column.push_forced(card);
            }
            column.uncover();
            debug!("  Dealt {} cards to tableau {}.", column.len(), i);
            tableau.push(column);
        }

        // The rest of the deck becomes the stock, face-down.
        deck.turn_face_down();
        self.table = Table { stock: deck, waste, foundations, tableau };
        info!("Table ready: {} cards left in stock.", self.table.stock.len());
        Ok(())
    }

    /// True once every tableau column is empty.
    pub fn is_finished(&self) -> bool {
        check_win_condition(&self.table.tableau)
    }

    /// Applies one move. `play` is a source pile, optionally followed by a
    /// destination pile:
    ///
    /// - `[Tableau(i)]` / `[Waste]`: move the top card to the first
    ///   foundation (0..3) that accepts it.
    /// - `[Stock]`: deal one card to the waste, or recycle the waste when
    ///   the stock is empty.
    /// - `[Tableau(i), Foundation(j) | Tableau(j)]`: move the face-up run
    ///   the destination accepts.
    /// - `[Waste, Foundation(j) | Tableau(j)]`: move the waste's top card.
    ///
    /// Anything else is [`Violation::InvalidMove`]. An empty `play` or an
    /// out-of-range index is a [`GameError::CallerContract`] error. On any
    /// error the table is unchanged.
    pub fn play(&mut self, play: &[StackType]) -> GameResult<()> {
        if play.is_empty() {
            return Err(GameError::CallerContract {
                message: "a move needs at least a source pile".to_string(),
            });
        }
        for stack in play {
            stack.validate()?;
        }

        let result = match *play {
            [source @ (StackType::Tableau(_) | StackType::Waste)] => {
                self.move_to_any_foundation(source)
            }
            [StackType::Stock] => {
                self.draw_from_stock();
                Ok(())
            }
            [from @ StackType::Tableau(_), to @ (StackType::Foundation(_) | StackType::Tableau(_))] => {
                if from == to {
                    Err(Violation::SamePile.into())
                } else {
                    self.transfer(from, to, pile_to_pile)
                }
            }
            [from @ StackType::Waste, to @ (StackType::Foundation(_) | StackType::Tableau(_))] => {
                self.transfer(from, to, card_to_pile)
            }
            _ => Err(Violation::InvalidMove.into()),
        };

        match &result {
            Ok(()) => info!("Played {:?}.", play),
            Err(e) => debug!("Rejected {:?}: {}", play, e),
        }
        result
    }

    fn move_to_any_foundation(&mut self, source: StackType) -> GameResult<()> {
        let target = self
            .table
            .pile(source)
            .and_then(Pile::top)
            .and_then(|card| find_automatic_foundation_move(&self.table.foundations, card))
            .ok_or(Violation::NoFoundationAccepts)?;

        self.transfer(source, StackType::Foundation(target as u8), card_to_pile)
    }

    fn draw_from_stock(&mut self) {
        let Table { stock, waste, .. } = &mut self.table;
        if !stock::deal_one_card_from_stock(stock, waste) {
            stock::reset_waste_to_stock(stock, waste);
        }
    }

    fn transfer(
        &mut self,
        from: StackType,
        to: StackType,
        apply: fn(&mut Pile, &mut Pile) -> GameResult<()>,
    ) -> GameResult<()> {
        let (source, dest) = self.table.pair_mut(from, to).ok_or_else(|| GameError::CallerContract {
            message: format!("no such pile pair: {} -> {}", from, to),
        })?;
        apply(source, dest)
    }
}

fn draw(deck: &mut Pile, dealing_to: StackType) -> GameResult<Card> {
    deck.pop().ok_or_else(|| GameError::Configuration {
        message: format!("deck ran out while dealing to {}", dealing_to),
    })
}

/// Moves the top card of `source` onto `dest` if `dest` accepts it.
/// A rejected card goes straight back on top of `source`.
fn card_to_pile(source: &mut Pile, dest: &mut Pile) -> GameResult<()> {
    let card = source.pop().ok_or(Violation::EmptyPile)?;
    if let Err(Rejected { card, violation }) = dest.try_push(card) {
        source.push_forced(card);
        return Err(violation.into());
    }
    if source.uncover() {
        debug!("  Uncovered {:?}.", source.top());
    }
    Ok(())
}

/// Moves the face-up run `dest` accepts from `source`.
fn pile_to_pile(source: &mut Pile, dest: &mut Pile) -> GameResult<()> {
    if source.is_empty() {
        return Err(Violation::EmptyPile.into());
    }

    let moved = dest.move_run(source)?;
    debug!("  Moved {} card(s).", moved);
    if source.uncover() {
        debug!("  Uncovered {:?}.", source.top());
    }
    Ok(())
}
