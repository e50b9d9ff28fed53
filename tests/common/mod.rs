use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub workdir: PathBuf,
    pub tree: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let workdir = tmp.path().join("work");
        fs::create_dir_all(&workdir).expect("create workdir");
        let tree = make_fixture_tree(tmp.path());
        Self {
            _tmp: tmp,
            workdir,
            tree,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("sphair");
        cmd.current_dir(&self.workdir);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn tree_str(&self) -> &str {
        self.tree.to_str().expect("tree path utf8")
    }
}

/// Lay out a small case tree in the corpus shape `<case>/openmc/geometry.xml`:
/// - case-1: two spheres whose radii differ by 1e-10, plus a third shell
/// - case-2: a sphere and a cylinder
/// - case-3: candidate directory with non-lowercase name, one valid sphere
/// - case-4: candidate without a geometry file
/// - case-5: malformed XML
pub fn make_fixture_tree(base: &Path) -> PathBuf {
    let tree = base.join("icsbep");

    let write_geom = |case: &str, dir: &str, body: &str| {
        let d = tree.join(case).join(dir);
        fs::create_dir_all(&d).expect("create candidate dir");
        fs::write(d.join("geometry.xml"), body).expect("write geometry");
    };

    write_geom(
        "case-1",
        "openmc",
        r#"<geometry>
             <surface id="1" type="sphere" coeffs="0 0 0 5.0"/>
             <surface id="2" type="sphere" r="5.0000000001"/>
             <surface id="3" type="sphere" radius="1.0" x0="2.0"/>
           </geometry>"#,
    );
    write_geom(
        "case-2",
        "openmc",
        r#"<geometry>
             <surface id="1" type="sphere" r="3.0"/>
             <surface id="2" type="cylinder" coeffs="0 0 1.0"/>
           </geometry>"#,
    );
    write_geom(
        "case-3",
        "OpenMC",
        r#"<geometry>
             <surface id="1" type="sphere" coeffs="0, 0, 0, 2.5"/>
           </geometry>"#,
    );
    fs::create_dir_all(tree.join("case-4/openmc")).expect("create empty candidate");
    write_geom("case-5", "openmc", "<geometry><surface type=");
    fs::create_dir_all(tree.join("notes")).expect("create noise dir");
    fs::write(tree.join("notes/readme.txt"), "not a candidate\n").expect("write noise");

    tree
}
