//! Delegation through a shared capability.

use crate::{Context, Snippet, Topic, Transcript};

/// Anything that can take a payment.
pub trait PaymentGateway {
    fn name(&self) -> &'static str;

    fn pay(&self, amount: f32) -> String {
        format!("Make payment of {amount:.2} via {}", self.name())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Razorpay;

impl PaymentGateway for Razorpay {
    fn name(&self) -> &'static str {
        "razorpay"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Stripe;

impl PaymentGateway for Stripe {
    fn name(&self) -> &'static str {
        "stripe"
    }

    fn pay(&self, amount: f32) -> String {
        format!("Charge {} cents via stripe", (amount * 100.0).round() as i64)
    }
}

/// Hands every payment to its gateway.
#[derive(Debug, Clone, Default)]
pub struct Payment<G = Razorpay> {
    gateway: G,
}

impl<G: PaymentGateway> Payment<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn make_payment(&self, amount: f32) -> String {
        self.gateway.pay(amount)
    }
}

pub struct Interfaces;

impl Snippet for Interfaces {
    fn topic(&self) -> Topic {
        Topic::Interfaces
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let new_payment: Payment = Payment::default();
        out.line(new_payment.make_payment(30.0));

        let gateways: [&dyn PaymentGateway; 2] = [&Razorpay, &Stripe];
        for gateway in gateways {
            out.line(gateway.pay(12.5));
        }
    }
}
