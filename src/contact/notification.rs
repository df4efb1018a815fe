use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

/// Transient on-screen message shown after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Submitted,
    Incomplete,
    UnknownService,
    Malformed,
    RateLimited,
    Unavailable,
}

impl Notification {
    const ALL: [Notification; 6] = [
        Notification::Submitted,
        Notification::Incomplete,
        Notification::UnknownService,
        Notification::Malformed,
        Notification::RateLimited,
        Notification::Unavailable,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Notification::Submitted => "Form Submitted! 🎉",
            Notification::Incomplete => "Oops! Something is missing.",
            Notification::UnknownService | Notification::Malformed => "Oops! Something is wrong.",
            Notification::RateLimited => "Slow down a little.",
            Notification::Unavailable => "Something went wrong.",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Notification::Submitted => "Thank you for reaching out. We will get back to you soon!",
            Notification::Incomplete => "Please fill out all the fields.",
            Notification::UnknownService => "Please pick a service from the list.",
            Notification::Malformed => "We could not read the form. Please try again.",
            Notification::RateLimited => "Too many requests. Please try again in a minute.",
            Notification::Unavailable => {
                "We could not save your request. Please try again shortly."
            }
        }
    }

    pub fn variant(self) -> Variant {
        match self {
            Notification::Submitted => Variant::Default,
            _ => Variant::Destructive,
        }
    }

    pub fn is_destructive(self) -> bool {
        self.variant() == Variant::Destructive
    }

    /// Short id carried in the one-shot toast cookie.
    pub fn code(self) -> &'static str {
        match self {
            Notification::Submitted => "submitted",
            Notification::Incomplete => "incomplete",
            Notification::UnknownService => "unknown-service",
            Notification::Malformed => "malformed",
            Notification::RateLimited => "rate-limited",
            Notification::Unavailable => "unavailable",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }
}

impl Serialize for Notification {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Notification", 3)?;
        s.serialize_field("title", self.title())?;
        s.serialize_field("description", self.description())?;
        s.serialize_field("variant", &self.variant())?;
        s.end()
    }
}
