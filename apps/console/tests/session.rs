//! End-to-end menu sessions driven through in-memory input and output.

use std::io::Cursor;

use shopcart_console::{Console, Session, ShopConfig};
use shopcart_core::{Cart, Catalog};

struct Outcome {
    output: String,
    cart: Cart,
}

fn run_with(config: ShopConfig, input: &str) -> Outcome {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(console, Catalog::standard(), config);

    session.run().expect("in-memory session should not fail");

    let cart = session.cart().clone();
    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    Outcome { output, cart }
}

fn run(input: &str) -> Outcome {
    run_with(ShopConfig::default(), input)
}

fn cart_ids(cart: &Cart) -> Vec<&str> {
    cart.items().iter().map(|line| line.product.id.as_str()).collect()
}

#[test]
fn exit_right_away() {
    let outcome = run("7\n");

    assert!(outcome.output.starts_with("Welcome to the Console Store!\n"));
    assert!(outcome.output.contains("1. View Inventory"));
    assert!(outcome.output.contains("7. Exit"));
    assert!(outcome.output.trim_end().ends_with("Goodbye!"));
    assert!(outcome.cart.is_empty());
}

#[test]
fn closed_input_ends_the_session() {
    let outcome = run("1\n");

    assert!(outcome.output.contains("--- Store Inventory ---"));
    assert!(outcome.output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn view_inventory_lists_every_product() {
    let outcome = run("1\n7\n");

    assert!(outcome.output.contains(
        "1. Mechanical Keyboard [Physical] - $89.99 (+ $10.00 shipping) - Weight: 1.2kg"
    ));
    assert!(outcome
        .output
        .contains("4. Java Masterclass Ebook [Digital] - $29.99 - Instant Download"));
}

#[test]
fn add_then_view_with_java20() {
    let outcome = run("2\n1\n2\n5\njava20\n3\n7\n");

    assert!(outcome.output.contains("Added 2 x Mechanical Keyboard to cart."));
    assert!(outcome.output.contains("Success! 20% discount applied."));
    assert!(outcome.output.contains("Subtotal:          $179.98"));
    assert!(outcome.output.contains("Discount (20%):   -$36.00"));
    assert!(outcome.output.contains("Shipping:          $20.00"));
    assert!(outcome.output.contains("TOTAL:             $163.98"));

    assert_eq!(cart_ids(&outcome.cart), ["P001"]);
    assert_eq!(outcome.cart.discount().bps(), 2000);
}

#[test]
fn same_product_twice_gives_two_lines() {
    let outcome = run("2\n2\n1\n2\n2\n1\n3\n7\n");

    assert_eq!(cart_ids(&outcome.cart), ["P002", "P002"]);
    assert_eq!(
        outcome.output.matches("| Qty: 1 | Price: $45.50").count(),
        2
    );
}

#[test]
fn non_numeric_product_number_is_reported() {
    let outcome = run("2\nabc\n7\n");

    assert!(outcome
        .output
        .contains("Invalid input: product number must be a whole number, got 'abc'"));
    assert!(!outcome.output.contains("Enter quantity: "));
    assert!(outcome.cart.is_empty());
}

#[test]
fn product_number_out_of_range_is_reported() {
    let outcome = run("2\n6\n2\n0\n7\n");

    assert_eq!(
        outcome
            .output
            .matches("Invalid input: product number must be between 1 and 5")
            .count(),
        2
    );
    assert!(outcome.cart.is_empty());
}

#[test]
fn quantity_must_be_positive() {
    let outcome = run("2\n1\n0\n2\n1\n-3\n7\n");

    assert_eq!(
        outcome
            .output
            .matches("Invalid input: quantity must be positive")
            .count(),
        2
    );
    assert!(outcome.cart.is_empty());
}

#[test]
fn quantity_above_configured_maximum_is_reported() {
    let config = ShopConfig {
        max_item_quantity: 3,
        ..ShopConfig::default()
    };
    let outcome = run_with(config, "2\n1\n4\n2\n1\n3\n7\n");

    assert!(outcome
        .output
        .contains("Invalid input: quantity must be between 1 and 3"));
    assert_eq!(outcome.cart.len(), 1);
    assert_eq!(outcome.cart.items()[0].quantity, 3);
}

#[test]
fn input_closed_mid_flow_adds_nothing() {
    let outcome = run("2\n1\n");

    assert!(outcome.cart.is_empty());
    assert!(outcome.output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn remove_shifts_later_lines() {
    let outcome = run("2\n1\n1\n2\n2\n1\n2\n4\n1\n4\n2\n7\n");

    assert!(outcome.output.contains("Removed Gaming Mouse from cart."));
    assert_eq!(cart_ids(&outcome.cart), ["P001", "D001"]);
}

#[test]
fn remove_from_empty_cart_does_not_prompt() {
    let outcome = run("4\n7\n");

    assert!(outcome.output.contains("--- Your Cart is Empty ---"));
    assert!(!outcome.output.contains("Enter line number to remove: "));
}

#[test]
fn remove_out_of_range_leaves_cart_unchanged() {
    let outcome = run("2\n1\n1\n4\n2\n4\nfirst\n7\n");

    assert!(outcome
        .output
        .contains("Invalid input: line number must be between 1 and 1"));
    assert!(outcome
        .output
        .contains("Invalid input: line number must be a whole number, got 'first'"));
    assert_eq!(cart_ids(&outcome.cart), ["P001"]);
}

#[test]
fn invalid_coupon_resets_discount() {
    let outcome = run("2\n1\n1\n5\nJAVA20\n5\nSAVEBIG\n3\n7\n");

    assert!(outcome.output.contains("Invalid or expired coupon code."));
    assert!(outcome.cart.discount().is_zero());

    let last_view = outcome.output.rsplit("--- Current Cart ---").next().unwrap();
    assert!(!last_view.contains("Discount ("));
    assert!(last_view.contains("TOTAL:             $99.99"));
}

#[test]
fn coupon_prompt_advertises_both_codes() {
    let outcome = run("5\nwelcome10\n7\n");

    assert!(outcome
        .output
        .contains("Enter coupon code (Try 'JAVA20' or 'WELCOME10'): "));
    assert!(outcome.output.contains("Success! 10% discount applied."));
}

#[test]
fn checkout_empty_cart() {
    let outcome = run("6\n7\n");

    assert!(outcome.output.contains("Cart is empty. Add items first."));
    assert!(!outcome.output.contains("Confirm purchase?"));
}

#[test]
fn checkout_confirmed_clears_cart_and_discount() {
    let outcome = run("2\n1\n2\n5\nJAVA20\n6\nYES\n7\n");

    assert!(outcome.output.contains("Final Total to charge: $163.98"));
    assert!(outcome.output.contains("Processing payment..."));
    assert!(outcome
        .output
        .contains("Payment Successful! Thank you for your order."));
    assert!(outcome.output.contains("Order reference: "));
    assert!(outcome.output.contains("2 item(s), charged $163.98"));

    assert!(outcome.cart.is_empty());
    assert!(outcome.cart.discount().is_zero());
}

#[test]
fn checkout_declined_keeps_cart() {
    let outcome = run("2\n4\n1\n6\nno\n7\n");

    assert!(outcome.output.contains("Checkout cancelled."));
    assert_eq!(cart_ids(&outcome.cart), ["D001"]);
}

#[test]
fn unknown_menu_option() {
    let outcome = run("9\nhello\n7\n");

    assert_eq!(
        outcome
            .output
            .matches("Invalid option. Please try again.")
            .count(),
        2
    );
}

#[test]
fn configured_currency_symbol_is_used() {
    let config = ShopConfig {
        store_name: "Euro Shop".to_string(),
        currency_symbol: "€".to_string(),
        ..ShopConfig::default()
    };
    let outcome = run_with(config, "2\n5\n1\n3\n7\n");

    assert!(outcome.output.starts_with("Welcome to the Euro Shop!"));
    assert!(outcome.output.contains("TOTAL:             €19.99"));
}
