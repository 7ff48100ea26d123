//! Boot example
//!
//! Runs the identity boot sequence twice against a preference file in the
//! temp directory. The first run derives the pairing colors; the second
//! restores them.
//!
//! Set `CYBERWARE_IFACE` to read the address of a real interface and the
//! host machine-id instead of the built-in fixtures.

use anyhow::Context;
use cyberware::{CyberwareIdentity, DeviceRegistry, Hardware, IdentityConfig, Peripherals};
use cyberware_core::FileStore;
use cyberware_hal::{
    CountingBuzzer, FixedStation, FixedUniqueId, MachineIdSource, RecordingIndicator,
    StationInterface, SysfsStation, UniqueIdSource,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let (unique_id, station): (Box<dyn UniqueIdSource>, Box<dyn StationInterface>) =
        match std::env::var("CYBERWARE_IFACE") {
            Ok(iface) => (Box::new(MachineIdSource::new()), Box::new(SysfsStation::new(iface))),
            Err(_) => (
                Box::new(FixedUniqueId::new(vec![0x0F, 0x88, 0x9A, 0x00])),
                Box::new(FixedStation::new([0x5C, 0xCF, 0x7F, 0x0A, 0x1B, 0x2C])),
            ),
        };

    let indicator = RecordingIndicator::new();
    let buzzer = CountingBuzzer::new();
    let mut peripherals = Peripherals::new()
        .with_indicator(indicator.clone())
        .with_buzzer(buzzer.clone());

    let hardware = Hardware {
        unique_id: unique_id.as_ref(),
        station: station.as_ref(),
        capabilities: peripherals.capabilities(),
    };

    let path = std::env::temp_dir().join("cyberware-boot-example.json");
    let config = IdentityConfig::default();
    let registry = DeviceRegistry::new();

    for boot in 1..=2 {
        let mut store = FileStore::open(&path).context("opening preference file")?;

        let identity = match CyberwareIdentity::initialize(
            &config,
            &hardware,
            &mut store,
            &mut rand::thread_rng(),
            &registry,
        ) {
            Ok(identity) => identity,
            Err(e) if e.allows_unpaired_boot() => {
                tracing::warn!(error = %e, "Stored pairing identity unusable, booting unpaired");
                let unpaired = config.clone().with_capabilities(cyberware::Capabilities::empty());
                CyberwareIdentity::initialize(
                    &unpaired,
                    &hardware,
                    &mut store,
                    &mut rand::thread_rng(),
                    &registry,
                )?
            }
            Err(e) => return Err(e.into()),
        };

        if store.flush_if_requested().context("writing preference file")? {
            println!("Saved pairing identity to {}", path.display());
        }

        println!("Boot {}: {}", boot, identity.info());
        println!("  name:        {}", identity.name());
        println!("  private MAC: {}", identity.mac_private_str());
        println!("  public MAC:  {}", identity.mac_public_str());

        match identity.pairing() {
            Some(pairing) => println!("  pairing:     {}", pairing),
            None => println!("  pairing:     none"),
        }

        identity.announce(&mut peripherals)?;
    }

    println!("Indicator showed {:?}", indicator.history());
    println!("Buzzer sounded {} time(s)", buzzer.count());
    println!("Registry: {:?}", registry.keys());

    Ok(())
}
