//! The main menu.

use std::fmt;

/// One of the seven numbered menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewInventory,
    AddItem,
    ViewCart,
    RemoveItem,
    ApplyCoupon,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewInventory,
        MenuChoice::AddItem,
        MenuChoice::ViewCart,
        MenuChoice::RemoveItem,
        MenuChoice::ApplyCoupon,
        MenuChoice::Checkout,
        MenuChoice::Exit,
    ];

    /// Number the user types to pick this option.
    pub const fn number(self) -> u8 {
        match self {
            MenuChoice::ViewInventory => 1,
            MenuChoice::AddItem => 2,
            MenuChoice::ViewCart => 3,
            MenuChoice::RemoveItem => 4,
            MenuChoice::ApplyCoupon => 5,
            MenuChoice::Checkout => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewInventory => "View Inventory",
            MenuChoice::AddItem => "Add Item to Cart",
            MenuChoice::ViewCart => "View Cart",
            MenuChoice::RemoveItem => "Remove Item from Cart",
            MenuChoice::ApplyCoupon => "Apply Discount Code",
            MenuChoice::Checkout => "Checkout",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Maps typed input ("3", " 3 ") to an option.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let number = input.trim().parse::<u8>().ok()?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_option() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for input in ["", "0", "8", "-1", "one", "1.0", "256"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuChoice::RemoveItem.to_string(), "4. Remove Item from Cart");
    }
}
