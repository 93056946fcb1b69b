use std::fmt;

/// The two observable classes of the free-text `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Done,
    Pending,
}

impl StatusClass {
    /// Classifies a raw status label. Only "selesai" (any casing) counts as done.
    pub fn of(status: &str) -> Self {
        if status.to_lowercase() == "selesai" {
            StatusClass::Done
        } else {
            StatusClass::Pending
        }
    }

    /// CSS class used by the result panel.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Done => "status-selesai",
            StatusClass::Pending => "status-pending",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_in_any_casing() {
        for label in ["Selesai", "selesai", "SELESAI", "sElEsAi"] {
            assert_eq!(StatusClass::of(label), StatusClass::Done, "{label}");
        }
    }

    #[test]
    fn test_everything_else_is_pending() {
        for label in ["Pending", "diproses", "", "selesai ", "Selesai!"] {
            assert_eq!(StatusClass::of(label), StatusClass::Pending, "{label:?}");
        }
        assert_eq!(StatusClass::Pending.css_class(), "status-pending");
    }
}
