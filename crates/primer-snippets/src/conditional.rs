//! Branching with `if`.

use crate::{Context, Snippet, Topic, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Adult,
    Teenager,
    Kid,
}

impl AgeGroup {
    pub fn describe(self) -> &'static str {
        match self {
            AgeGroup::Adult => "person is an adult",
            AgeGroup::Teenager => "teenager",
            AgeGroup::Kid => "kid",
        }
    }
}

pub fn classify_age(age: u32) -> AgeGroup {
    if age >= 18 {
        AgeGroup::Adult
    } else if age >= 13 {
        AgeGroup::Teenager
    } else {
        AgeGroup::Kid
    }
}

pub fn is_authorized(role: &str, has_permissions: bool) -> bool {
    role == "admin" && has_permissions
}

pub struct Conditional;

impl Snippet for Conditional {
    fn topic(&self) -> Topic {
        Topic::Conditional
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let age = 18;
        out.line(classify_age(age).describe());

        let role = "admin";
        let has_permissions = true;
        if is_authorized(role, has_permissions) {
            out.line("Yes");
        }

        // the inner `age` only lives for this block
        {
            let age = 15;
            if age >= 18 {
                out.line(format!("person is an adult {age}"));
            } else {
                out.line(format!("scoped age {age} is not an adult"));
            }
        }
        out.line(format!("outer age is still {age}"));

        let label = if age >= 18 { "adult" } else { "minor" };
        out.line(label);
    }
}
