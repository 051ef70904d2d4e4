// src/logic/stock.rs
//! Handles drawing from the Stock pile (dealing to Waste, recycling Waste).

use log::{debug, info};

use crate::components::pile::Pile;
use crate::logic::rules::stock_waste;

/// Deals one card from the Stock pile to the Waste pile, face-up.
/// Returns true if a card was dealt, false otherwise.
pub fn deal_one_card_from_stock(stock: &mut Pile, waste: &mut Pile) -> bool {
    if !stock_waste::can_deal_from_stock(stock.is_empty()) {
        debug!("  Stock is empty. Cannot deal.");
        return false;
    }

    match stock.pop() {
        Some(mut card) => {
            // Waste cards always land face-up, whatever the stock held.
            if card.is_face_down() {
                card.flip();
            }
            info!("  Dealing {} from Stock to Waste.", card);
            waste.push_forced(card);
            true
        }
        None => false,
    }
}

/// Turns the Waste pile back over onto the empty Stock, one card at a time,
/// face-down. The card dealt last becomes the bottom of the new Stock, so the
/// next deals repeat the previous order.
/// Returns true if the reset was performed, false otherwise.
pub fn reset_waste_to_stock(stock: &mut Pile, waste: &mut Pile) -> bool {
    if !stock_waste::can_reset_stock_from_waste(stock.is_empty(), waste.is_empty()) {
        debug!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return false;
    }

    info!("  Resetting {} cards from Waste to Stock.", waste.len());
    while let Some(mut card) = waste.pop() {
        if card.is_face_up() {
            card.flip();
        }
        stock.push_forced(card);
    }
    true
}
