//! Application-wide constants.

use std::time::Duration;

/// Interval between UI ticks (redraws, toast countdown).
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default toast lifetime in ticks (two seconds at the default tick rate).
pub const DEFAULT_TOAST_TICKS: u8 = 20;

/// Application title shown in the header.
pub const APP_TITLE: &str = "Picart";

/// Title of the cart list panel.
pub const CART_TITLE: &str = "Shopping Cart:";

/// Banner printed by `picart version`.
pub const LOGO: &str = r"
 ____  _                _
|  _ \(_) ___ __ _ _ __| |_
| |_) | |/ __/ _` | '__| __|
|  __/| | (_| (_| | |  | |_
|_|   |_|\___\__,_|_|   \__|
";
