use crate::config::{FacilityConfig, FillerPolicy};
use crate::facility::Facility;
use crate::intake::extract_flowers;
use crate::recipe::Flower;
use pyo3::prelude::*;

/// A streaming bouquet assembly facility.
///
/// Designs are compiled once on initialization. Flowers can then be fed one
/// at a time with `feed`, or in bulk from raw text with `run`. Stock carries
/// over between calls.
#[pyclass(name = "Facility")]
struct FacilityPy {
    facility: Facility,
}

#[pymethods]
impl FacilityPy {
    /// Compiles every bouquet design found in the given text.
    ///
    /// Args:
    ///     designs (str): Text containing designs such as `AS10a10b25`.
    ///     spread_filler (bool): Take filler from several flower types when
    ///         no single type holds enough. Defaults to False.
    ///
    /// Raises:
    ///     ValueError: If a design is malformed.
    #[new]
    #[pyo3(signature = (designs, spread_filler = false))]
    fn new(designs: &str, spread_filler: bool) -> PyResult<Self> {
        let config = FacilityConfig {
            filler_policy: if spread_filler {
                FillerPolicy::Spread
            } else {
                FillerPolicy::SingleType
            },
            ..FacilityConfig::default()
        };
        let facility = Facility::from_text(designs, &config)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(FacilityPy { facility })
    }

    /// Feeds a single flower such as `aS`.
    ///
    /// Returns:
    ///     str | None: The code of the bouquet this flower completed, if any.
    ///
    /// Raises:
    ///     ValueError: If the flower is not a lowercase type followed by `L` or `S`.
    fn feed(&mut self, flower: &str) -> PyResult<Option<String>> {
        let flower: Flower = flower
            .parse()
            .map_err(|e: crate::error::IntakeError| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
            })?;
        Ok(self.facility.receive(flower).map(|b| b.display_code))
    }

    /// Feeds every flower found in the given text, in order.
    ///
    /// Returns:
    ///     list[str]: The codes of all bouquets completed, in completion order.
    fn run(&mut self, text: &str) -> Vec<String> {
        extract_flowers(text)
            .filter_map(|flower| self.facility.receive(flower))
            .map(|b| b.display_code)
            .collect()
    }
}

/// Python bindings to the Ikebana bouquet assembly engine.
#[pymodule]
fn ikebana(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FacilityPy>()?;
    Ok(())
}
