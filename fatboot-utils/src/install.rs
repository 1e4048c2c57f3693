use fatboot::io::std::FileIO;
use fatboot::Installer;
use pretty_hex::PrettyHex;

use crate::error::Error;
use crate::partition;

#[derive(Copy, Clone, Debug, Default)]
pub struct Options {
    pub partition: Option<usize>,
    pub dry_run: bool,
}

pub fn install(device: &str, filesystem: &str, options: Options) -> Result<(), Error> {
    let mut io = FileIO::open(device).map_err(|e| Error::Open(device.into(), e))?;
    if let Some(index) = options.partition {
        let offset = partition::offset(&mut io, index)?;
        io.set_offset(offset);
    }

    let mut installer = Installer::new(io);
    let plan = installer.prepare(filesystem)?;
    if options.dry_run {
        println!("sector 0:\n{:?}", plan.boot_sector().hex_dump());
        if let Some((id, sector)) = plan.extra() {
            println!("sector {}:\n{:?}", id, sector.hex_dump());
        }
        return Ok(());
    }
    installer.commit(&plan)?;

    println!("{} boot sector installed.", plan.variant());
    println!("You must now copy freeldr.sys, rosload.exe and freeldr.ini to {}.", device);
    Ok(())
}
