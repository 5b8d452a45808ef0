//! Computer configuration builder (translates the `Computer` builder of the
//! C++ catalogue).

use dp_core::Real;

/// An assembled computer configuration. Unset components are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    /// Processor.
    pub cpu: Option<String>,
    /// Main memory.
    pub memory: Option<String>,
    /// Storage drive.
    pub storage: Option<String>,
    /// Graphics card.
    pub graphics: Option<String>,
    /// Motherboard.
    pub motherboard: Option<String>,
    /// Power supply.
    pub power_supply: Option<String>,
    /// Cooling solution.
    pub cooling: Option<String>,
    /// Network interface.
    pub network: Option<String>,
    /// Warranty in years.
    pub warranty_years: u32,
}

fn component_price(component: &Option<String>, table: &[(&str, Real)]) -> Real {
    let Some(text) = component else { return 0.0 };
    table
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, price)| *price)
        .unwrap_or(0.0)
}

impl Computer {
    /// Rough price estimate from the catalogue's component table. Markers
    /// are matched in order, most expensive first.
    pub fn estimated_price(&self) -> Real {
        component_price(&self.cpu, &[("i9", 500.0), ("i7", 350.0), ("i5", 250.0)])
            + component_price(&self.memory, &[("32GB", 300.0), ("16GB", 150.0), ("8GB", 75.0)])
            + component_price(&self.storage, &[("1TB", 100.0), ("512GB", 50.0)])
            + component_price(&self.graphics, &[("RTX", 800.0), ("GTX", 400.0)])
    }
}

/// Fluent builder for [`Computer`].
///
/// ```
/// use dp_builder::ComputerBuilder;
///
/// let pc = ComputerBuilder::new()
///     .cpu("Intel i5-13400")
///     .memory("16GB DDR4-3200")
///     .warranty_years(2)
///     .build();
/// assert_eq!(pc.estimated_price(), 400.0);
/// assert_eq!(pc.storage, None);
/// ```
#[derive(Debug, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    /// Start from an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the processor.
    pub fn cpu(mut self, cpu: &str) -> Self {
        self.computer.cpu = Some(cpu.to_string());
        self
    }

    /// Set the main memory.
    pub fn memory(mut self, memory: &str) -> Self {
        self.computer.memory = Some(memory.to_string());
        self
    }

    /// Set the storage drive.
    pub fn storage(mut self, storage: &str) -> Self {
        self.computer.storage = Some(storage.to_string());
        self
    }

    /// Set the graphics card.
    pub fn graphics(mut self, graphics: &str) -> Self {
        self.computer.graphics = Some(graphics.to_string());
        self
    }

    /// Set the motherboard.
    pub fn motherboard(mut self, motherboard: &str) -> Self {
        self.computer.motherboard = Some(motherboard.to_string());
        self
    }

    /// Set the power supply.
    pub fn power_supply(mut self, power_supply: &str) -> Self {
        self.computer.power_supply = Some(power_supply.to_string());
        self
    }

    /// Set the cooling solution.
    pub fn cooling(mut self, cooling: &str) -> Self {
        self.computer.cooling = Some(cooling.to_string());
        self
    }

    /// Set the network interface.
    pub fn network(mut self, network: &str) -> Self {
        self.computer.network = Some(network.to_string());
        self
    }

    /// Set the warranty length.
    pub fn warranty_years(mut self, years: u32) -> Self {
        self.computer.warranty_years = years;
        self
    }

    /// Finish, yielding the configuration.
    pub fn build(self) -> Computer {
        self.computer
    }

    /// Director preset: the catalogue's gaming build.
    pub fn gaming() -> Computer {
        ComputerBuilder::new()
            .cpu("Intel i9-13900K")
            .memory("32GB DDR5-5600")
            .storage("1TB NVMe SSD")
            .graphics("NVIDIA RTX 4080")
            .motherboard("ASUS ROG Strix Z790-E")
            .power_supply("850W 80+ Gold Modular")
            .cooling("AIO Liquid Cooler 280mm")
            .network("Wi-Fi 6E + Ethernet")
            .warranty_years(3)
            .build()
    }

    /// Director preset: the catalogue's office build.
    pub fn office() -> Computer {
        ComputerBuilder::new()
            .cpu("Intel i5-13400")
            .memory("16GB DDR4-3200")
            .storage("512GB SATA SSD")
            .graphics("Integrated Intel UHD")
            .motherboard("MSI B760M Pro-A")
            .power_supply("500W 80+ Bronze")
            .cooling("Stock CPU Cooler")
            .network("Ethernet")
            .warranty_years(1)
            .build()
    }

    /// Director preset: the catalogue's workstation build.
    pub fn workstation() -> Computer {
        ComputerBuilder::new()
            .cpu("Intel i7-13700K")
            .memory("64GB DDR5-4800")
            .storage("2TB NVMe SSD")
            .graphics("NVIDIA RTX 4070")
            .motherboard("ASUS Pro WS W790-ACE")
            .power_supply("750W 80+ Platinum")
            .cooling("Tower Air Cooler")
            .network("Wi-Fi 6 + Dual Ethernet")
            .warranty_years(5)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_build_is_all_unset() {
        let pc = ComputerBuilder::new().build();
        assert_eq!(pc, Computer::default());
        assert_relative_eq!(pc.estimated_price(), 0.0);
    }

    #[test]
    fn gaming_preset_price() {
        let pc = ComputerBuilder::gaming();
        // i9 + 32GB + 1TB + RTX
        assert_relative_eq!(pc.estimated_price(), 500.0 + 300.0 + 100.0 + 800.0);
        assert_eq!(pc.warranty_years, 3);
    }

    #[test]
    fn office_preset_price() {
        let pc = ComputerBuilder::office();
        // i5 + 16GB + 512GB, integrated graphics priced at zero
        assert_relative_eq!(pc.estimated_price(), 250.0 + 150.0 + 50.0);
    }

    #[test]
    fn unknown_components_price_at_zero() {
        let pc = ComputerBuilder::new()
            .cpu("AMD Ryzen 9 7950X")
            .graphics("Radeon RX 7900")
            .build();
        assert_relative_eq!(pc.estimated_price(), 0.0);
    }
}
