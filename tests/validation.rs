#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hrms::libs::error::ValidationError;
    use hrms::libs::validation::{parse_date, validate_attendance, validate_employee};

    #[test]
    fn test_valid_employee_is_trimmed_and_normalized() {
        let employee = validate_employee("  E001 ", " Ada Lovelace ", " Ada.Lovelace@Example.COM ", "Engineering\n").unwrap();

        assert_eq!(employee.employee_id(), "E001");
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert_eq!(employee.email(), "Ada.Lovelace@example.com");
        assert_eq!(employee.department(), "Engineering");
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let err = validate_employee("E001", "Ada Lovelace", "not-an-email", "Engineering").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("not-an-email".to_string()));
    }

    #[test]
    fn test_email_edge_cases() {
        let invalid = [
            "ada@",
            "@example.com",
            "ada@example",
            "ada@@example.com",
            "ada lovelace@example.com",
            ".ada@example.com",
            "ada.@example.com",
            "ada..lovelace@example.com",
            "ada@-example.com",
            "ada@example..com",
        ];
        for email in invalid {
            assert!(
                matches!(validate_employee("E001", "Ada", email, "R&D"), Err(ValidationError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }

        let valid = ["ada@example.com", "ada+hr@mail.example.co.uk", "first.last@sub-domain.example.org"];
        for email in valid {
            assert!(validate_employee("E001", "Ada", email, "R&D").is_ok(), "{email} should be accepted");
        }
    }

    #[test]
    fn test_missing_employee_fields() {
        assert_eq!(
            validate_employee("", "Ada", "ada@example.com", "R&D").unwrap_err(),
            ValidationError::MissingField("employee_id")
        );
        assert_eq!(
            validate_employee("E001", "   ", "ada@example.com", "R&D").unwrap_err(),
            ValidationError::MissingField("full_name")
        );
        assert_eq!(
            validate_employee("E001", "Ada", "", "R&D").unwrap_err(),
            ValidationError::MissingField("email")
        );
        assert_eq!(
            validate_employee("E001", "Ada", "ada@example.com", "\t").unwrap_err(),
            ValidationError::MissingField("department")
        );
    }

    #[test]
    fn test_valid_attendance() {
        let attendance = validate_attendance(" E001 ", "2024-01-15", " present ").unwrap();

        assert_eq!(attendance.employee_id(), "E001");
        assert_eq!(attendance.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(attendance.status(), "present");
    }

    #[test]
    fn test_invalid_attendance_dates() {
        for date in ["2024-02-30", "15/01/2024", "2024-13-01", "yesterday"] {
            assert_eq!(
                validate_attendance("E001", date, "present").unwrap_err(),
                ValidationError::InvalidDate(date.to_string())
            );
        }
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_missing_attendance_fields() {
        assert_eq!(
            validate_attendance("", "2024-01-15", "present").unwrap_err(),
            ValidationError::MissingField("employee_id")
        );
        assert_eq!(
            validate_attendance("E001", " ", "present").unwrap_err(),
            ValidationError::MissingField("date")
        );
        assert_eq!(
            validate_attendance("E001", "2024-01-15", "").unwrap_err(),
            ValidationError::MissingField("status")
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::MissingField("email").to_string(), "Field 'email' is required");
        assert_eq!(
            ValidationError::InvalidDate("2024-02-30".to_string()).to_string(),
            "'2024-02-30' is not a valid date, expected YYYY-MM-DD"
        );
    }
}
