#![forbid(unsafe_code)]

//! Cart fee-breakdown sheet.
//!
//! Subtotal, service fee, delivery fee (with a free-delivery promo path)
//! and the total, behind a height-capped sheet. Fees are carried in cents
//! and formatted at the edge.

use std::time::Duration;

use sheetkit_widgets::sheet::{BottomSheet, SheetConfig, SheetEvent};

/// Fee breakdown for one order, in cents.
#[derive(Debug, Clone, Copy)]
pub struct OrderFees {
    pub subtotal: u32,
    pub service_fee: u32,
    pub delivery_fee: u32,
    /// Struck-through fee when a promo makes delivery free.
    pub original_delivery_fee: Option<u32>,
}

impl OrderFees {
    /// Whether the promo path applies.
    #[inline]
    #[must_use]
    pub fn is_free_delivery(&self) -> bool {
        self.delivery_fee == 0 && self.original_delivery_fee.is_some()
    }

    /// Order total in cents.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.subtotal + self.service_fee + self.delivery_fee
    }
}

fn money(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// The order-summary screen: a fee card behind a height-capped sheet.
#[derive(Debug)]
pub struct OrderSummarySheet {
    sheet: BottomSheet,
    fees: OrderFees,
    visible: bool,
}

impl OrderSummarySheet {
    #[must_use]
    pub fn new(viewport_height: f64, fees: OrderFees) -> Self {
        // The fee card never needs more than half the screen.
        let config = SheetConfig::new().max_height(viewport_height * 0.5);
        Self {
            sheet: BottomSheet::new(viewport_height, config),
            fees,
            visible: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.sheet.set_visible(visible);
    }

    /// Advance animations one frame, relaying a dismissal into the flag.
    pub fn tick(&mut self, dt: Duration) {
        if self.sheet.tick(dt).contains(&SheetEvent::Dismissed) {
            self.visible = false;
        }
    }

    /// Direct access to the underlying sheet.
    #[inline]
    pub fn sheet(&mut self) -> &mut BottomSheet {
        &mut self.sheet
    }

    /// Render the fee card as plain text lines.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let frame = self.sheet.frame();
        if !frame.visible {
            return Vec::new();
        }

        let fees = &self.fees;
        let mut lines = vec![
            "Order Summary".to_string(),
            format!("Subtotal      {}", money(fees.subtotal)),
            format!("Service Fee   {}", money(fees.service_fee)),
        ];
        if fees.is_free_delivery() {
            let original = fees.original_delivery_fee.unwrap_or(0);
            lines.push(format!("Delivery Fee  Free (was {})", money(original)));
        } else {
            lines.push(format!("Delivery Fee  {}", money(fees.delivery_fee)));
        }
        lines.push(format!("Total         {}", money(fees.total())));
        lines
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
