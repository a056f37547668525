//! Well-known store keys.

/// Saved tea entries (JSON array of [`TeaEntry`](crate::TeaEntry)).
pub const TEAS: &str = "teas";

/// Tea types offered by the type selector.
pub const TYPES_AVAILABLE: &str = "typesAvailable";

/// Brands offered by the brand selector.
pub const BRANDS_AVAILABLE: &str = "brandsAvailable";

/// Ingredient vocabulary for the ingredient picker.
pub const INGREDIENTS_AVAILABLE: &str = "ingredientsAvailable";

/// Active interface language code.
pub const LANG: &str = "lang";
