fn builder_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> = once_cell::sync::Lazy::new(|| {
        let run = escargot::CargoBuild::new()
            .manifest_path(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
            .package("optarg")
            .example("builder")
            .target_dir(target_dir())
            .run()
            .unwrap_or_else(|e| panic!("{e}"));
        run.path().to_owned()
    });
    snapbox::cmd::Command::new(&*BIN)
        .env("COLUMNS", "80")
        .env_remove("CLICOLOR_FORCE")
}

fn target_dir() -> std::path::PathBuf {
    const TEMPDIR: &str = env!("CARGO_TARGET_TMPDIR");

    let target_dir = std::path::Path::new(TEMPDIR).join("optarg_builder_target");
    std::fs::create_dir_all(&target_dir).unwrap();
    target_dir
}

#[test]
fn full_command_line() {
    builder_cmd()
        .args([
            "--bin", "/a/b", "--arch", "arm64", "-nps", "/a/b/src", "foo.go", "bar.go",
        ])
        .assert()
        .success()
        .stdout_eq(
            "\
source: /a/b/src
bin: /a/b
arch: arm64
jobs: 1
noproc: true
purge: true
remainder: foo.go bar.go
",
        );
}

#[test]
fn defaults_when_absent() {
    builder_cmd().assert().success().stdout_matches(
        "\
...
arch: amd64
jobs: 1
noproc: false
purge: false
remainder:[..]
",
    );
}

#[test]
fn malformed_number_uses_default() {
    builder_cmd()
        .args(["-j", "lots"])
        .assert()
        .success()
        .stdout_matches(
            "\
...
jobs: 1
...
",
        );
    builder_cmd()
        .args(["--jobs", "8"])
        .assert()
        .success()
        .stdout_matches(
            "\
...
jobs: 8
...
",
        );
}

#[test]
#[cfg(unix)]
fn non_utf8_argument_is_replaced() {
    use std::os::unix::ffi::OsStrExt as _;

    builder_cmd()
        .args(["--bin", "/a/b"])
        .arg(std::ffi::OsStr::from_bytes(b"main\xff.go"))
        .assert()
        .success()
        .stdout_matches(
            "\
...
bin: /a/b
...
remainder: main\u{fffd}.go
",
        );
}

#[test]
fn help() {
    builder_cmd().arg("-h").assert().success().stdout_eq(
        "\
Usage: builder [options]:

 --source, -s: Path to the source folder. Long descriptions are wrapped to the
               width of the terminal and indented so they line up with the other
               descriptions.
    --bin, -b: Path to the binary folder.
   --arch, -a: Target architecture. (defaults to: amd64)
   --jobs, -j: Number of packages to build in parallel. (defaults to: 1)
 --noproc, -n: Skip pre/post processing.
  --purge, -p: Clean compiled packages after linking is complete.
   --help, -h: Print this help and exit.
",
    );
}

#[test]
fn unknown_option() {
    builder_cmd()
        .args(["-n", "--frobnicate"])
        .env("COLUMNS", "50")
        .assert()
        .code(1)
        .stdout_eq("")
        .stderr_eq(
            "\
error: unknown option `--frobnicate` specified

Usage: builder [options]:

 --source, -s: Path to the source folder. Long
               descriptions are wrapped to the
               width of the terminal and indented
               so they line up with the other
               descriptions.
    --bin, -b: Path to the binary folder.
   --arch, -a: Target architecture. (defaults to:
               amd64)
   --jobs, -j: Number of packages to build in
               parallel. (defaults to: 1)
 --noproc, -n: Skip pre/post processing.
  --purge, -p: Clean compiled packages after
               linking is complete.
   --help, -h: Print this help and exit.
",
        );
}
