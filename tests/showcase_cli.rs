use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_factory_method_prints_trips() {
    Command::new(env!("CARGO_BIN_EXE_factory-method"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Drive the Scooter : 10km\nDrive the Bike : 20km\n");
}

#[test]
fn test_abstract_factory_prints_both_brands() {
    Command::new(env!("CARGO_BIN_EXE_abstract-factory"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("******* Honda **********\n"))
        .stdout(predicate::str::contains("******* Hero **********\nRegular Bike- Name\n"))
        .stdout(predicate::str::ends_with("Sports Bike- Name\nScooty- Name\n"));
}

#[test]
fn test_logging_stays_off_stdout() {
    Command::new(env!("CARGO_BIN_EXE_factory-method"))
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Drive the Scooter : 10km\nDrive the Bike : 20km\n")
        .stderr(predicate::str::contains("creating vehicle"));
}
