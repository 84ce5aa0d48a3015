// Contact form state: field values, per-field errors and submit progress.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The `name` attribute of the matching input.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.input_name() == name)
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Phone => "Phone number is required",
            Field::Message => "Message is required",
        }
    }
}

pub const EMAIL_INVALID: &str = "Email is invalid";

/// Loose `\S+@\S+\.\S+` shape check, unanchored like the regex: some
/// whitespace-free run must hold a non-empty prefix, an `@`, then a `.` with
/// at least one char on each side. Any `@` in the run may be the split.
pub fn looks_like_email(s: &str) -> bool {
    s.split_whitespace().any(|token| {
        token
            .match_indices('@')
            .any(|(at, _)| at > 0 && has_inner_dot(&token[at + 1..]))
    })
}

fn has_inner_dot(domain: &str) -> bool {
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    errors: [Option<&'static str>; 4],
    state: SubmitState,
}

impl ContactForm {
    fn slot(field: Field) -> usize {
        match field {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Message => 3,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[Self::slot(field)]
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Editing a field clears its error.
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value.to_string();
        self.errors[Self::slot(field)] = None;
    }

    /// Recompute every field error; returns true when the form is valid.
    pub fn validate(&mut self) -> bool {
        for field in Field::ALL {
            let v = self.value(field).trim();
            let err = if v.is_empty() {
                Some(field.required_message())
            } else if field == Field::Email && !looks_like_email(v) {
                Some(EMAIL_INVALID)
            } else {
                None
            };
            self.errors[Self::slot(field)] = err;
        }
        !self.has_errors()
    }

    /// Start submitting if valid. Returns false (and leaves errors set) when
    /// validation fails or a submit is already in flight.
    pub fn submit(&mut self) -> bool {
        if self.state == SubmitState::Submitting {
            return false;
        }
        if !self.validate() {
            return false;
        }
        self.state = SubmitState::Submitting;
        true
    }

    /// Delivery finished: clear all fields.
    pub fn complete(&mut self) {
        if self.state != SubmitState::Submitting {
            return;
        }
        *self = Self {
            state: SubmitState::Sent,
            ..Self::default()
        };
    }
}
