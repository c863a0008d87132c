use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::{tempdir, NamedTempFile};

const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

fn atlas(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atlas"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

fn empty_config() -> NamedTempFile { NamedTempFile::new().expect("Failed to create temp config") }

#[test]
fn methods_can_be_filtered_by_group() {
    let config = empty_config();
    atlas(config.path())
        .args(["methods", "--group", "erigon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("erigon_getLatestLogs"))
        .stdout(predicate::str::contains("eth_chainId").not());
}

#[test]
fn defaults_follow_the_chain() {
    let config = empty_config();
    atlas(config.path())
        .args(["defaults", "--chain", "base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chain\": \"base\""));
}

#[test]
fn validate_sets_the_exit_code() {
    let config = empty_config();
    atlas(config.path())
        .args(["validate", "--method", "eth_getBalance", "0x123", "latest"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid  account"));
    atlas(config.path())
        .args(["validate", "--method", "eth_getBalance", VITALIK, "latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid").not());
}

#[test]
fn render_fills_missing_values() {
    let config = empty_config();
    atlas(config.path())
        .args(["render", "--method", "eth_getBalance", "--library", "ethers", VITALIK])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("provider.getBalance('{}', 'latest')", VITALIK)));
}

#[test]
fn render_refuses_invalid_values() {
    let config = empty_config();
    atlas(config.path())
        .args(["render", "--method", "eth_getBalance", "0x123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for eth_getBalance: account"));
}

#[test]
fn render_reports_unsupported_combinations() {
    let config = empty_config();
    atlas(config.path())
        .args(["render", "--method", "trace_block", "--library", "viem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trace_block is not available for javascript/viem"));
    atlas(config.path())
        .args(["render", "--method", "eth_chainId", "--language", "python", "--library", "viem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not available for language"));
    atlas(config.path())
        .args(["render", "--method", "eth_nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown method: eth_nothing"));
}

#[test]
fn config_preferences_choose_the_target() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[preferences]\nlibrary = \"web3py\"\nchain = \"polygon\"\n").expect("write config");

    atlas(&path)
        .args(["render", "--method", "eth_chainId"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chain_id = w3.eth.chain_id"));
    atlas(&path)
        .args(["render", "--method", "eth_chainId", "--library", "fetch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch(providerEndpoint"));
    atlas(&path).args(["defaults"]).assert().success().stdout(predicate::str::contains("\"chain\": \"polygon\""));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    atlas(&dir.path().join("absent.toml"))
        .args(["methods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn support_reads_the_bundled_dataset() {
    let config = empty_config();
    atlas(config.path())
        .args(["support", "--provider", "ankr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ankr on Ethereum"))
        .stdout(predicate::str::contains("Archive Data"))
        .stdout(predicate::str::contains("eth_chainId"));
    atlas(config.path())
        .args(["support", "--provider", "infura", "--chain", "base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Infura has not been probed on Base"));
}
