//! The impls and functions
//!
use std::cmp::max;

use anyhow::{bail, Result};

use crate::threshold::{Status, Thresholds};

impl Thresholds {
    /// Validate the threshold combination, before any catalog call is made.
    ///
    /// The message is the historical one of this plugin, kept verbatim.
    pub fn validate(&self) -> Result<()> {
        if self.warning < self.critical {
            bail!("Warning value must be less than critical");
        }
        Ok(())
    }

    /// Classify a single instance count.
    pub fn classify(&self, count: usize) -> Status {
        if count as i64 <= self.critical {
            Status::Critical
        } else if count as i64 <= self.warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}

/// Evaluate the instance count of every service name, in the given order.
///
/// `instance_count` is the catalog lookup. Any error it returns aborts the
/// evaluation immediately: the result is [Status::Unknown] with the error
/// text as the message, and results gathered so far are dropped. There are
/// no retries and no partial reports.
///
/// The message gets one `name=count ` entry per evaluated service, trailing
/// space included; that byte format is part of the plugin's output contract.
/// An empty service list yields OK with an empty message.
pub fn evaluate<F>(
    service_names: &[String],
    thresholds: &Thresholds,
    mut instance_count: F,
) -> (Status, String)
where
    F: FnMut(&str) -> Result<usize>,
{
    let mut status = Status::Ok;
    let mut message = String::new();

    for service_name in service_names {
        let count = match instance_count(service_name) {
            Ok(count) => count,
            Err(error) => return (Status::Unknown, format!("{:#}", error)),
        };
        message.push_str(&format!("{}={} ", service_name, count));
        status = max(status, thresholds.classify(count));
    }

    (status, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn unit_status_display_and_exit_codes() {
        assert_eq!(format!("{}", Status::Ok), "OK");
        assert_eq!(format!("{}", Status::Warning), "WARNING");
        assert_eq!(format!("{}", Status::Critical), "CRITICAL");
        assert_eq!(format!("{}", Status::Unknown), "UNKNOWN");
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);
    }

    #[test]
    fn unit_status_orders_by_severity() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert_eq!(max(Status::Critical, Status::Warning), Status::Critical);
    }

    #[test]
    fn unit_validate_rejects_warning_below_critical() {
        let thresholds = Thresholds {
            warning: 1,
            critical: 2,
        };
        let error = thresholds.validate().unwrap_err();
        assert_eq!(error.to_string(), "Warning value must be less than critical");
    }

    #[test]
    fn unit_validate_accepts_equal_and_higher_warning() {
        assert!(Thresholds {
            warning: 2,
            critical: 2
        }
        .validate()
        .is_ok());
        assert!(Thresholds {
            warning: 1,
            critical: 0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn unit_classify_uses_inclusive_lower_bounds() {
        let thresholds = Thresholds {
            warning: 2,
            critical: 1,
        };
        assert_eq!(thresholds.classify(0), Status::Critical);
        assert_eq!(thresholds.classify(1), Status::Critical);
        assert_eq!(thresholds.classify(2), Status::Warning);
        assert_eq!(thresholds.classify(3), Status::Ok);
    }

    #[test]
    fn unit_classify_negative_thresholds_never_trigger() {
        let thresholds = Thresholds {
            warning: -1,
            critical: -2,
        };
        assert_eq!(thresholds.classify(0), Status::Ok);
    }

    #[test]
    fn unit_evaluate_empty_service_list_is_ok() {
        let thresholds = Thresholds {
            warning: 1,
            critical: 0,
        };
        let (status, message) = evaluate(&[], &thresholds, |_| Ok(1));
        assert_eq!(status, Status::Ok);
        assert_eq!(message, "");
    }

    #[test]
    fn unit_evaluate_message_keeps_order_and_trailing_space() {
        let thresholds = Thresholds {
            warning: 1,
            critical: 0,
        };
        let (status, message) = evaluate(&names(&["s1", "s2"]), &thresholds, |name| {
            if name == "s1" {
                Ok(3)
            } else {
                Ok(4)
            }
        });
        assert_eq!(status, Status::Ok);
        assert_eq!(message, "s1=3 s2=4 ");
    }

    #[test]
    fn unit_evaluate_aggregates_maximum_severity() {
        // warning=1, critical=0: web has 2 instances, db has none.
        let thresholds = Thresholds {
            warning: 1,
            critical: 0,
        };
        let (status, message) = evaluate(&names(&["db", "web"]), &thresholds, |name| {
            if name == "web" {
                Ok(2)
            } else {
                Ok(0)
            }
        });
        assert_eq!(status, Status::Critical);
        assert!(message.contains("web=2"));
        assert!(message.contains("db=0"));
    }

    #[test]
    fn unit_evaluate_critical_is_not_downgraded_by_later_warning() {
        let thresholds = Thresholds {
            warning: 1,
            critical: 0,
        };
        let (status, _) = evaluate(&names(&["down", "low"]), &thresholds, |name| {
            if name == "down" {
                Ok(0)
            } else {
                Ok(1)
            }
        });
        assert_eq!(status, Status::Critical);
    }

    #[test]
    fn unit_evaluate_count_at_warning_bound_is_warning() {
        let thresholds = Thresholds {
            warning: 2,
            critical: 1,
        };
        let (status, message) = evaluate(&names(&["api"]), &thresholds, |_| Ok(2));
        assert_eq!(status, Status::Warning);
        assert_eq!(message, "api=2 ");
    }

    #[test]
    fn unit_evaluate_lookup_error_returns_unknown_with_error_text() {
        let thresholds = Thresholds {
            warning: 1,
            critical: 0,
        };
        let (status, message) = evaluate(&names(&["ok-svc", "bad-svc"]), &thresholds, |name| {
            if name == "ok-svc" {
                Ok(5)
            } else {
                Err(anyhow!("Error reading from URL: http://127.0.0.1:8500"))
            }
        });
        assert_eq!(status, Status::Unknown);
        // prior loop progress is dropped, only the error text remains
        assert_eq!(message, "Error reading from URL: http://127.0.0.1:8500");
    }
}
