//! Layout conformance of the built-in catalogs.

use mu_protocol::catalog::{self, Catalog};
use mu_protocol::{ClientVersion, Direction, LayoutError};

#[derive(Debug, Default)]
pub struct CheckReport {
    pub packets: usize,
    pub errors: Vec<(Direction, LayoutError)>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn check_catalogs() -> CheckReport {
    let mut report = CheckReport::default();
    for catalog in [&catalog::SERVER, &catalog::CLIENT] {
        check_catalog(catalog, &mut report);
    }
    report
}

fn check_catalog(catalog: &'static Catalog, report: &mut CheckReport) {
    report.packets += catalog.len();
    for version in ClientVersion::ALL {
        log::debug!(
            "{}: {} packets current for client {}",
            catalog.direction,
            catalog.for_version(version).len(),
            version
        );
    }
    report.errors.extend(
        catalog
            .layout_errors()
            .into_iter()
            .map(|error| (catalog.direction, error)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_are_clean() {
        let report = check_catalogs();
        assert!(report.is_clean(), "{:?}", report.errors);
        assert_eq!(report.packets, catalog::SERVER.len() + catalog::CLIENT.len());
    }
}
