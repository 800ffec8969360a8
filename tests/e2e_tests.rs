//! End-to-end integration tests
//!
//! These tests drive the library through its public API only:
//! - The demonstration sequence is run and compared with
//!   tests/fixtures/demo/expected.txt
//! - The savings and checking scenarios are replayed step by step
//! - All variants are exercised through `dyn BankAccount`

#[cfg(test)]
mod tests {
    use bank_accounts::demo;
    use bank_accounts::{
        Account, AccountError, BankAccount, CheckingAccount, SavingsAccount, TransactionKind,
    };
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::Path;

    /// Run the demonstration and compare its output with a fixture file
    fn run_demo_fixture(fixture_name: &str) {
        let expected_path = format!("tests/fixtures/{}/expected.txt", fixture_name);
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut output = Vec::new();
        demo::run(&mut output).unwrap_or_else(|e| panic!("Failed to run demo: {}", e));

        let actual_output = String::from_utf8(output).expect("Demo output is not UTF-8");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[test]
    fn test_demo_output_matches_fixture() {
        run_demo_fixture("demo");
    }

    #[test]
    fn test_savings_scenario() {
        let mut savings =
            SavingsAccount::new("SA001", "John Smith", Decimal::new(50, 1), Decimal::new(10000, 1))
                .unwrap();

        savings.deposit(Decimal::new(100, 0)).unwrap();
        assert_eq!(savings.balance(), Decimal::new(11000, 1));

        let interest = savings.add_interest().unwrap();
        assert_eq!(interest.amount, Decimal::new(55, 0));
        assert_eq!(savings.balance(), Decimal::new(11550, 1));

        savings.withdraw(Decimal::new(50, 0)).unwrap();
        assert_eq!(savings.balance(), Decimal::new(11050, 1));
    }

    #[test]
    fn test_checking_scenario() {
        let mut checking =
            CheckingAccount::new("CA001", "Jane Doe", Decimal::new(1000, 1), Decimal::ZERO)
                .unwrap();

        checking.withdraw(Decimal::new(50, 0)).unwrap();
        assert_eq!(checking.balance(), Decimal::new(-500, 1));

        let error = checking.withdraw(Decimal::new(100, 0)).unwrap_err();
        assert!(matches!(error, AccountError::OverdraftLimitExceeded { .. }));
        assert_eq!(checking.balance(), Decimal::new(-500, 1));
    }

    fn open(kind: &str, balance: Decimal) -> Box<dyn BankAccount> {
        match kind {
            "standard" => Box::new(Account::new("AC001", "Holder", balance)),
            "savings" => Box::new(
                SavingsAccount::new("SA001", "Holder", Decimal::new(50, 1), balance).unwrap(),
            ),
            "checking" => Box::new(
                CheckingAccount::new("CA001", "Holder", Decimal::new(100, 0), balance).unwrap(),
            ),
            _ => panic!("Unknown account kind: {}", kind),
        }
    }

    #[rstest]
    fn test_non_positive_deposit_is_rejected(
        #[values("standard", "savings", "checking")] kind: &str,
        #[values(Decimal::ZERO, Decimal::new(-1, 2))] amount: Decimal,
    ) {
        let mut account = open(kind, Decimal::new(10, 0));

        let error = account.deposit(amount).unwrap_err();

        assert_eq!(
            error,
            AccountError::non_positive_amount(TransactionKind::Deposit, amount)
        );
        assert_eq!(error.to_string(), "Deposit amount must be positive.");
        assert_eq!(account.balance(), Decimal::new(10, 0));
    }

    #[rstest]
    fn test_positive_deposit_adds_exact_amount(
        #[values("standard", "savings", "checking")] kind: &str,
        #[values(Decimal::new(1, 2), Decimal::new(100, 0), Decimal::new(123456789, 4))]
        amount: Decimal,
    ) {
        let mut account = open(kind, Decimal::new(10, 0));

        account.deposit(amount).unwrap();

        assert_eq!(account.balance(), Decimal::new(10, 0) + amount);
    }

    #[rstest]
    #[case::standard_overdraws("standard", Decimal::new(11, 0), false)]
    #[case::savings_overdraws("savings", Decimal::new(11, 0), false)]
    #[case::checking_overdraws("checking", Decimal::new(11, 0), true)]
    #[case::checking_past_limit("checking", Decimal::new(111, 0), false)]
    #[case::standard_exact("standard", Decimal::new(10, 0), true)]
    fn test_withdrawal_rules_per_variant(
        #[case] kind: &str,
        #[case] amount: Decimal,
        #[case] succeeds: bool,
    ) {
        let mut account = open(kind, Decimal::new(10, 0));

        let result = account.withdraw(amount);

        assert_eq!(result.is_ok(), succeeds);
        let expected = if succeeds {
            Decimal::new(10, 0) - amount
        } else {
            Decimal::new(10, 0)
        };
        assert_eq!(account.balance(), expected);
    }
}
