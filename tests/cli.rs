use predicates::prelude::*;

const UNREACHABLE_CMS: &str = "http://127.0.0.1:1";

#[test]
fn growth_prints_positive_badge() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.args(["growth", "--baseline", "1000", "--live", "1500"])
        .assert()
        .success()
        .stdout("+50.0%\n");
}

#[test]
fn growth_prints_none_when_the_channel_shrank() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.args(["growth", "--baseline", "1000", "--live", "900"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("growth"));
}

#[test]
fn fetch_degrades_to_empty_output_when_cms_is_down() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.env("GENLATAM_CMS_URL", UNREACHABLE_CMS)
        .args(["fetch", "cases"])
        .assert()
        .success()
        .stdout("[]\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.env("GENLATAM_CMS_URL", UNREACHABLE_CMS)
        .args(["fetch", "case", "--slug", "campana-norte"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn stats_without_api_key_warns_and_prints_no_live_data() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.env_remove("YOUTUBE_API_KEY")
        .args(["stats", "--channel", "UC1", "--baseline", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"live\": null"))
        .stdout(predicate::str::contains("\"growth\": null"))
        .stderr(predicate::str::contains("YOUTUBE_API_KEY is not set"));
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genlatam");
    cmd.env("RUST_LOG", "debug")
        .args(["growth", "--baseline", "10", "--live", "20"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}
