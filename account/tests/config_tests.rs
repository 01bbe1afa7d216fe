use std::env;

use account::config::{DEFAULT_DAILY_WITHDRAWAL_LIMIT, DEFAULT_MAX_DAILY_DEPOSITS};
use account::AccountPolicy;
use common::decimal::dec;
use common::error::Error;

#[test]
fn test_default_policy() {
    let policy = AccountPolicy::default();
    assert_eq!(policy.max_daily_deposits, 3);
    assert_eq!(policy.daily_withdrawal_limit, dec!(1000));
    assert!(policy.validate().is_ok());
}

#[test]
fn test_negative_withdrawal_limit_is_invalid() {
    let policy = AccountPolicy::new(3, dec!(-0.5));
    assert!(matches!(policy.validate(), Err(Error::ConfigurationError(_))));
}

// Environment variables are process-wide, so every case runs in one test
#[test]
fn test_policy_from_env() {
    env::remove_var("MAX_DAILY_DEPOSITS");
    env::remove_var("DAILY_WITHDRAWAL_LIMIT");
    let policy = AccountPolicy::from_env().unwrap();
    assert_eq!(policy.max_daily_deposits, DEFAULT_MAX_DAILY_DEPOSITS);
    assert_eq!(policy.daily_withdrawal_limit, DEFAULT_DAILY_WITHDRAWAL_LIMIT);

    env::set_var("MAX_DAILY_DEPOSITS", "5");
    env::set_var("DAILY_WITHDRAWAL_LIMIT", "2500.50");
    let policy = AccountPolicy::from_env().unwrap();
    assert_eq!(policy, AccountPolicy::new(5, dec!(2500.50)));

    env::set_var("MAX_DAILY_DEPOSITS", "many");
    assert!(matches!(AccountPolicy::from_env(), Err(Error::ConfigurationError(_))));

    env::set_var("MAX_DAILY_DEPOSITS", "5");
    env::set_var("DAILY_WITHDRAWAL_LIMIT", "a lot");
    assert!(matches!(AccountPolicy::from_env(), Err(Error::DecimalError(_))));

    env::set_var("DAILY_WITHDRAWAL_LIMIT", "-10");
    assert!(matches!(AccountPolicy::from_env(), Err(Error::ConfigurationError(_))));

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("DAILY_WITHDRAWAL_LIMIT", "10");
        env::set_var("MAX_DAILY_DEPOSITS", OsStr::from_bytes(b"\xff\xfe"));
        assert!(matches!(AccountPolicy::from_env(), Err(Error::ConfigurationError(_))));

        env::set_var("MAX_DAILY_DEPOSITS", "2");
        env::set_var("DAILY_WITHDRAWAL_LIMIT", OsStr::from_bytes(b"\xff\xfe"));
        assert!(matches!(AccountPolicy::from_env(), Err(Error::ConfigurationError(_))));
    }

    env::remove_var("MAX_DAILY_DEPOSITS");
    env::remove_var("DAILY_WITHDRAWAL_LIMIT");
}
