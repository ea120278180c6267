//! List the well-known DH groups.

use kexaudit_dh::well_known_groups;

use crate::report::GroupReport;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let groups: Vec<GroupReport> = well_known_groups().iter().map(GroupReport::from).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("Well-known DH groups:");
    for group in &groups {
        let q = if group.has_subgroup_order { ", q" } else { "" };
        println!(
            "  {:<8} {:>5} bits  {}{q}",
            group.source, group.key_size_bits, group.name
        );
    }
    Ok(())
}
