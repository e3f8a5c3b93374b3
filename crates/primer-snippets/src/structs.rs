//! Records with a constructor and methods.

use crate::{Context, Snippet, Topic, Transcript};
use chrono::NaiveDateTime;

/// A customer order. `Default` gives zero amount, empty strings and no
/// timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub id: String,
    pub amount: f32,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Order {
    pub fn new(id: impl Into<String>, amount: f32, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            status: status.into(),
            created_at: None,
        }
    }

    /// Needs exclusive access because it writes.
    pub fn change_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }
}

pub struct Structs;

impl Snippet for Structs {
    fn topic(&self) -> Topic {
        Topic::Structs
    }

    fn run(&self, ctx: &Context, out: &mut Transcript) {
        let mut order = Order::new("1", 50.0, "accepted");
        order.created_at = Some(ctx.now());
        out.line(&order.status);

        order.change_status("paid");
        out.line(format!("status after change: {}", order.status));
        out.line(format!("amount: {}", order.amount()));
        out.line(format!("Order {order:?}"));

        out.line(format!("default {:?}", Order::default()));

        struct Language {
            name: &'static str,
            is_good: bool,
        }
        let language = Language {
            name: "golang",
            is_good: true,
        };
        out.line(format!("{} {}", language.name, language.is_good));
    }
}
