use mailfsm_lib::{check_email, is_email_valid, validate_email};
use proptest::prelude::*;

proptest! {
    // Pure function: same input, same answer, and the report agrees with
    // the boolean.
    #[test]
    fn idempotent_and_consistent(s in ".*") {
        let first = is_email_valid(Some(&s));
        let second = is_email_valid(Some(&s));
        prop_assert_eq!(first, second);
        prop_assert_eq!(validate_email(Some(&s)).ok, first);
        prop_assert_eq!(check_email(Some(&s)).is_ok(), first);
    }

    #[test]
    fn over_length_always_rejected(s in "[a-z0-9]{321,400}") {
        prop_assert!(!is_email_valid(Some(&s)));
    }

    #[test]
    fn no_at_means_invalid(s in "[a-z0-9.!#$%&'*+/=?^_`{|}~-]{1,40}") {
        prop_assert!(!is_email_valid(Some(&s)));
    }

    // Well-formed addresses built from the grammar itself must pass.
    #[test]
    fn well_formed_addresses_accepted(
        local in "[a-z0-9]{1,8}([.+_-][a-z0-9]{1,8}){0,2}",
        domain in "[a-z0-9]{1,8}(-[a-z0-9]{1,8})?(\\.[a-z0-9]{1,8}){1,3}",
    ) {
        let address = format!("{local}@{domain}");
        prop_assert!(
            is_email_valid(Some(&address)),
            "expected {address:?} to be valid: {:?}",
            check_email(Some(&address))
        );
    }

    // Anything accepted must have the shape the grammar promises.
    #[test]
    fn accepted_inputs_have_the_promised_shape(s in "[a-z@.\\-]{1,30}") {
        if is_email_valid(Some(&s)) {
            let ats = s.matches('@').count();
            prop_assert_eq!(ats, 1);

            let (local, domain) = s.split_once('@').unwrap();
            prop_assert!(!local.is_empty());
            prop_assert!(local.chars().filter(|c| *c != '.').count() <= 63);
            prop_assert!(!local.starts_with('.') && !local.ends_with('.'));
            prop_assert!(!local.contains(".."));

            prop_assert!(domain == "localhost" || domain.contains('.'));
            for label in domain.split('.') {
                prop_assert!(!label.is_empty());
                prop_assert!(!label.starts_with('-') && !label.ends_with('-'));
            }
        }
    }
}

#[test]
fn absent_input_is_invalid() {
    assert!(!is_email_valid(None));
}
