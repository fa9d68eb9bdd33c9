/// Activity categories
///
/// The entry form offers exactly these three. The store accepts any string,
/// so records written by other clients may carry a category outside this set.

/// Gains or losses from competitive trading rounds.
pub const CATEGORY_COMPETITIVE_TRADING: &str = "Competitive Trading";

/// Fees paid to a platform or exchange.
pub const CATEGORY_FEE: &str = "Fee";

/// Airdrop payouts cashed out.
pub const CATEGORY_CAIR_AIRDROP: &str = "Cair AirDrop";

/// All categories offered by the entry form, in display order.
pub const ACTIVITY_CATEGORIES: [&str; 3] = [
    CATEGORY_COMPETITIVE_TRADING,
    CATEGORY_FEE,
    CATEGORY_CAIR_AIRDROP,
];

/// Returns true if `category` is one of the categories offered by the entry form.
pub fn is_known_category(category: &str) -> bool {
    ACTIVITY_CATEGORIES.contains(&category)
}

/// Date format accepted for `Activity::date`.
pub const ACTIVITY_DATE_FORMAT: &str = "%Y-%m-%d";
