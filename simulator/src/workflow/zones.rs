use satlinkcore::obstruction::validate_zones;
use satlinkcore::prelude::{LinkError, LinkResult};
use satlinkcore::BlockageZone;

/// The vessel's editable set of obstructions.
///
/// The core only ever sees snapshots of this collection.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    zones: Vec<BlockageZone>,
    next_id: u64,
}

impl ZoneRegistry {
    pub fn new(zones: Vec<BlockageZone>) -> LinkResult<Self> {
        validate_zones(&zones)?;
        Ok(Self { zones, next_id: 1 })
    }

    pub fn add(&mut self, zone: BlockageZone) -> LinkResult<()> {
        zone.validate()?;
        if self.contains(&zone.id) {
            return Err(LinkError::DuplicateZoneId(zone.id));
        }
        log::info!("adding blockage zone {} ({})", zone.id, zone.name);
        self.zones.push(zone);
        Ok(())
    }

    /// Adds a zone centred on a bearing and returns its generated id.
    pub fn add_sector(
        &mut self,
        name: &str,
        center_rel_az: f64,
        width: f64,
        max_elevation: f64,
    ) -> LinkResult<String> {
        let id = self.fresh_id();
        let zone = BlockageZone::from_sector(id.clone(), name, center_rel_az, width, max_elevation)?;
        self.add(zone)?;
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<BlockageZone> {
        let idx = self.zones.iter().position(|zone| zone.id == id)?;
        log::info!("removing blockage zone {}", id);
        Some(self.zones.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&BlockageZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[BlockageZone] {
        &self.zones
    }

    pub fn snapshot(&self) -> Vec<BlockageZone> {
        self.zones.clone()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("zone-{}", self.next_id);
            self.next_id += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}
