use crate::Result;
use kdam::{tqdm, BarExt};
use std::{thread, time::Duration};

/// Pause between components.
const STEP: Duration = Duration::from_millis(500);

/// Step a progress bar through the components.
pub(crate) fn animate(components: &[String]) -> Result<()> {
    let mut pb = tqdm!(total = components.len());
    for component in components {
        pb.set_description(format!("Item: {}", component));
        thread::sleep(STEP);
        pb.update(1)?;
    }
    eprintln!();
    Ok(())
}
