use std::path::Path;

const POWER_SUPPLY: &str = "/sys/class/power_supply";

/// Read the charge of the first battery from the Linux sysfs power-supply
/// interface.
///
/// Returns `None` if the system has no battery (desktop, VM) or its
/// capacity cannot be read.
pub fn read_battery() -> Option<f32> {
    read_battery_from(Path::new(POWER_SUPPLY))
}

/// Same as [`read_battery`], rooted at an arbitrary `power_supply` directory.
pub fn read_battery_from(root: &Path) -> Option<f32> {
    for name in ["BAT0", "BAT1", "BAT2"] {
        let base = root.join(name);
        if !base.exists() {
            continue;
        }

        let capacity = std::fs::read_to_string(base.join("capacity")).ok()?;
        let percent  = capacity.trim().parse::<u8>().ok()?;

        return Some(f32::from(percent.min(100)));
    }
    None
}
