//! One record embedded in another, with the inner fields promoted.
//!
//! `Deref`/`DerefMut` to the customer let `order.name` resolve to
//! `order.customer.name`. The order owns its customer outright.

use crate::{Context, Snippet, Topic, Transcript};
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("hello, {}", self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub id: String,
    pub amount: f32,
    pub status: String,
    pub customer: Customer,
}

impl Deref for Order {
    type Target = Customer;

    fn deref(&self) -> &Customer {
        &self.customer
    }
}

impl DerefMut for Order {
    fn deref_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }
}

pub struct Embedding;

impl Snippet for Embedding {
    fn topic(&self) -> Topic {
        Topic::Embedding
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let new_customer = Customer::new("harsh", "1234");
        let kept = new_customer.clone();

        let mut order = Order {
            id: "1".into(),
            amount: 20.0,
            status: "accepted".into(),
            customer: new_customer,
        };
        out.line(format!("{order:?}"));
        out.line(format!("promoted: {} {}", order.name, order.phone));
        out.line(order.greeting());

        order.name = "okbacha?".into();
        out.line(format!("through the order: {}", order.customer.name));
        out.line(format!("copy taken before: {}", kept.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order {
            id: "1".into(),
            amount: 20.0,
            status: "accepted".into(),
            customer: Customer::new("harsh", "1234"),
        }
    }

    #[test]
    fn test_fields_are_promoted() {
        let order = order();
        assert_eq!(order.name, "harsh");
        assert_eq!(order.phone, "1234");
        assert_eq!(order.greeting(), "hello, harsh");
    }

    #[test]
    fn test_mutation_through_promoted_path() {
        let mut order = order();
        order.name = "okbacha?".into();

        let inner: &Customer = &order.customer;
        assert_eq!(inner.name, "okbacha?");

        order.customer.phone = "5678".into();
        assert_eq!(order.phone, "5678");
    }

    #[test]
    fn test_order_owns_its_customer() {
        let original = Customer::new("harsh", "1234");
        let mut order = Order {
            customer: original.clone(),
            ..Default::default()
        };
        order.name = "changed".into();
        assert_eq!(original.name, "harsh");
        assert_ne!(order.customer, original);
    }
}
