use std::cmp::Ordering;
use std::env;
use std::process::Command;

// 128-bit lane backends this crate can compile against
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_arches: &'static [&'static str],
    target_feature: &'static str,
    cfg_flag: &'static str,
    enabled: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "neon" => 0,
            "sse" => 1,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse",
                target_arches: &["x86", "x86_64"],
                target_feature: "sse",
                cfg_flag: "sse",
                enabled: false,
            },
            CpuFeature {
                name: "neon",
                target_arches: &["aarch64"],
                target_feature: "neon",
                cfg_flag: "neon",
                enabled: false,
            },
        ]
    }

    // The lane intrinsics are only sound when the target baseline already carries the feature.
    fn enabled_by_target(&self, target_arch: &str, target_features: &[&str]) -> bool {
        self.target_arches.contains(&target_arch) && target_features.contains(&self.target_feature)
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    /// Returns `Some(true|false)` when the host reports on the feature, `None` when unknown.
    fn host_supports(&self, feature: &CpuFeature) -> Option<bool>;
    fn is_applicable(&self) -> bool;
}

struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn host_supports(&self, feature: &CpuFeature) -> Option<bool> {
        let contents = std::fs::read_to_string("/proc/cpuinfo").ok()?.to_lowercase();
        let detected = match feature.name {
            // aarch64 kernels report NEON as "asimd"
            "neon" => contents.contains("asimd") || contents.contains("neon"),
            name => contents.contains(name),
        };
        Some(detected)
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn host_supports(&self, feature: &CpuFeature) -> Option<bool> {
        let output = Command::new("sysctl").args(["-a"]).output().ok()?;
        let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();
        match feature.name {
            "sse" => Some(contents.contains("hw.optional.sse: 1")),
            "neon" => Some(contents.contains("hw.optional.neon: 1")),
            _ => None,
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// No windows detector: the target baseline decides there
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn resolve(features: &mut [CpuFeature], is_native_build: bool) {
        let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let target_features: Vec<&str> = target_features.split(',').collect();

        let detector = if is_native_build {
            Self::cpu_features_detectors()
                .into_iter()
                .find(|detector| detector.is_applicable())
        } else {
            None
        };

        for feature in features.iter_mut() {
            let by_target = feature.enabled_by_target(&target_arch, &target_features);
            // An unreadable host report falls back to the target baseline.
            let by_host = detector
                .as_ref()
                .and_then(|d| d.host_supports(feature))
                .unwrap_or(true);
            feature.enabled = by_target && by_host;
        }
    }

    fn apply(features: &mut [CpuFeature], force_fallback: bool) {
        features.sort();

        let cfg_flag = if force_fallback {
            "fallback"
        } else {
            features
                .iter()
                .find(|cpu_feature| cpu_feature.enabled)
                .map(|cpu_feature| cpu_feature.cfg_flag)
                .unwrap_or("fallback")
        };

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SIMDMUL_FORCE_FALLBACK");

    let force_fallback = env::var("SIMDMUL_FORCE_FALLBACK")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let mut features = CpuFeature::features();

    // Host detection only means something when host == target
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    let is_native_build = host == target;

    PlatformDetector::resolve(&mut features, is_native_build);
    PlatformDetector::apply(&mut features, force_fallback);
}
