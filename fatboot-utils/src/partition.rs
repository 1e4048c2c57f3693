use fatboot::io::IO;
use fatboot::io::std::FileIO;
use fatboot::types::SectorID;
use mbr_nostd::{MasterBootRecord, PartitionTable};

use crate::error::Error;

/// First sector of the `index`-th primary partition
pub fn offset(io: &mut FileIO, index: usize) -> Result<u64, Error> {
    let buffer = io.read(SectorID::BOOT).map_err(Error::PartitionTable)?;
    let mbr = MasterBootRecord::from_bytes(&buffer).map_err(|_| Error::Partition("Not MBR"))?;
    let entries = mbr.partition_table_entries();
    let entry = entries.get(index).ok_or(Error::Partition("Partition out of range"))?;
    if entry.sector_count == 0 {
        return Err(Error::Partition("Invalid partition"));
    }
    log::trace!("Partition offset {} num-blocks {}", entry.logical_block_address, entry.sector_count);
    Ok(entry.logical_block_address as u64)
}
