use rusqlite::{Connection, OptionalExtension};

use crate::model::repository::BlockedDevice;

/// returns the block list entry for `device_id`, or `None` if the device isn't blocked
pub fn get_blocked_device(
    device_id: &str,
    con: &Connection,
) -> Result<Option<BlockedDevice>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/blocked_devices/get_blocked_device.sql"
    ))?;
    pst.query_row([device_id], blocked_device_mapper).optional()
}

/// adds the device to the block list. Blocking an already blocked device replaces its reason and resets `blocked_at`
pub fn block_device(
    device_id: &str,
    reason: Option<&str>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/blocked_devices/block_device.sql"
    ))?;
    pst.execute(rusqlite::params![device_id, reason])?;
    Ok(())
}

/// removes the device from the block list. Does nothing if it wasn't on it
pub fn unblock_device(device_id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/blocked_devices/unblock_device.sql"
    ))?;
    pst.execute([device_id])?;
    Ok(())
}

pub fn get_all_blocked_devices(con: &Connection) -> Result<Vec<BlockedDevice>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/blocked_devices/get_all_blocked_devices.sql"
    ))?;
    let rows = pst.query_map([], blocked_device_mapper)?;
    rows.collect::<Result<Vec<BlockedDevice>, rusqlite::Error>>()
}

fn blocked_device_mapper(row: &rusqlite::Row) -> Result<BlockedDevice, rusqlite::Error> {
    Ok(BlockedDevice {
        device_id: row.get(0)?,
        blocked_at: row.get(1)?,
        reason: row.get(2)?,
    })
}
