//! Stats Records

use rust_decimal::Decimal;

/// Store-wide totals shown on the back-office dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub total_revenue: Decimal,
    pub total_users: u64,
    /// Active products only.
    pub total_products: u64,
    pub pending_orders: u64,
}
