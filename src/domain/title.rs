// Dashboard title variants and filename normalization
use regex::Regex;
use std::sync::LazyLock;

pub const WIP_DASHBOARD_SUFFIX: &str = " (WIP)";
pub const REF_DASHBOARD_SUFFIX: &str = "-ref";

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel-case pattern"));
static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z_0-9]+").expect("valid slug pattern"));

/// Convert a human title into a filesystem-safe identifier.
///
/// `cpuUsageByHost` becomes `cpu-usage-by-host`, `Disk I/O (bytes)` becomes
/// `disk-i-o-bytes-`.
pub fn normalize_title(title: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(title, "${1}-${2}").to_lowercase();
    NON_SLUG_RUN.replace_all(&split, "-").into_owned()
}

/// Turn a WIP title back into its reference form.
pub fn wip_to_ref_title(title: &str) -> String {
    let base = strip_suffix_ignore_case(title, WIP_DASHBOARD_SUFFIX).unwrap_or(title);
    if strip_suffix_ignore_case(base, REF_DASHBOARD_SUFFIX).is_some() {
        base.to_string()
    } else {
        format!("{base}{REF_DASHBOARD_SUFFIX}")
    }
}

pub fn ref_to_wip_title(title: &str) -> String {
    if strip_suffix_ignore_case(title, WIP_DASHBOARD_SUFFIX).is_some() {
        title.to_string()
    } else {
        format!("{title}{WIP_DASHBOARD_SUFFIX}")
    }
}

fn strip_suffix_ignore_case<'a>(title: &'a str, suffix: &str) -> Option<&'a str> {
    let split = title.len().checked_sub(suffix.len())?;
    if !title.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = title.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("cpuUsageByHost"), "cpu-usage-by-host");
        assert_eq!(normalize_title("cpu-ref"), "cpu-ref");
        assert_eq!(normalize_title("VMI Internal Metrics"), "vmi-internal-metrics");
        assert_eq!(normalize_title("proc_pid_stat  (all)"), "proc_pid_stat-all-");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_normalize_title_is_idempotent() {
        let titles = [
            "cpuUsageByHost",
            "Go Runtime -- GC (WIP)",
            "aB--cD__eF",
            "Ünïcode Title",
            "host.cpu.utilization%",
            "___",
        ];
        for title in titles {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once, "title {title:?}");
        }
    }

    #[test]
    fn test_wip_to_ref_title() {
        assert_eq!(wip_to_ref_title("cpu (WIP)"), "cpu-ref");
        assert_eq!(wip_to_ref_title("cpu (wip)"), "cpu-ref");
        assert_eq!(wip_to_ref_title("cpu-ref"), "cpu-ref");
        assert_eq!(wip_to_ref_title("cpu-REF (WIP)"), "cpu-REF");
        assert_eq!(wip_to_ref_title("cpu"), "cpu-ref");
        // Only one trailing suffix is stripped.
        assert_eq!(wip_to_ref_title("cpu (WIP) (WIP)"), "cpu (WIP)-ref");
    }

    #[test]
    fn test_ref_to_wip_title() {
        assert_eq!(ref_to_wip_title("cpu"), "cpu (WIP)");
        assert_eq!(ref_to_wip_title("cpu-ref (wip)"), "cpu-ref (wip)");
        let once = ref_to_wip_title("cpu");
        assert_eq!(ref_to_wip_title(&once), once);
    }

    #[test]
    fn test_round_trip_recovers_reference_title() {
        assert_eq!(wip_to_ref_title(&ref_to_wip_title("cpu")), "cpu-ref");
        assert_eq!(wip_to_ref_title(&ref_to_wip_title("cpu-ref")), "cpu-ref");
    }

    #[test]
    fn test_suffix_check_respects_char_boundaries() {
        assert_eq!(ref_to_wip_title("ééé"), "ééé (WIP)");
        assert_eq!(wip_to_ref_title("日本"), "日本-ref");
    }
}
