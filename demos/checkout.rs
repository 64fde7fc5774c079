//! Payment page checkout walk-through.
//!
//! Run with: `cargo run --example checkout`

use basai_pay::format::{format_card_input, format_expiry_input, sanitize_cvv_input};
use basai_pay::order::OrderSummary;
use basai_pay::payment::{booking_reference, PaymentForm, PaymentMethod, PaymentState, ReceiptFile};

fn main() {
    println!("=== Checkout ===\n");

    let order =
        OrderSummary::from_query("?hostel=Patan%20Hostel&duration=6%20Months&price=45%2C000");
    println!("Order: {} for {} ({})", order.hostel, order.duration, order.price_label());
    println!();

    let mut state = PaymentState::default();
    println!("Button: {}", state.button_label());

    let form = PaymentForm::default()
        .with_card_number(format_card_input("4539148803436467"))
        .with_card_name("Sita Sharma")
        .with_expiry(format_expiry_input("1229"))
        .with_cvv(sanitize_cvv_input("123"))
        .with_receipt(ReceiptFile::new("transfer.jpg", 84_992));

    // Nothing selected yet
    if let Err(e) = state.submit(&form) {
        println!("Submit: {}", e);
    }
    println!();

    for method in PaymentMethod::ALL {
        state = state.select(method);
        print!("{:<22} [{}] -> ", state.button_label(), method.icon_class());
        match state.submit(&form) {
            Ok(accepted) => println!("accepted ({})", accepted),
            Err(e) => println!("{}", e),
        }
    }
    println!();

    if let Some(receipt) = &form.receipt {
        println!("Receipt: {} ({})", receipt.name, receipt.size_label());
    }
    println!("Reference: {}", booking_reference(1_767_225_600_000));
}
