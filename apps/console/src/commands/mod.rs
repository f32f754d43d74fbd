//! # Menu Commands
//!
//! One function per menu flow. Each takes the console plus exactly the state
//! it needs, so the signature shows what a flow can touch.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── 1. View Inventory
//! ├── cart.rs      ◄─── 2. Add, 3. View, 4. Remove
//! ├── coupon.rs    ◄─── 5. Apply Discount Code
//! └── checkout.rs  ◄─── 6. Checkout
//! ```
//!
//! ## Error Handling
//! Bad input (`abc`, line 9 of 2) is reported with
//! [`Console::reject`](crate::console::Console::reject) and the flow returns
//! `Ok(())`. Only console I/O failures propagate as `Err`.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod coupon;
