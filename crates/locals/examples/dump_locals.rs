use just_locals::{LocalVariable, LocalVariableList, LocalVariableListBuilder};

fn main() {
    pretty_env_logger::init();

    let mut descriptors = LocalVariableListBuilder::new(2);
    descriptors
        .set_local(0, 0, 10, "x".into(), Some("I".into()), None, 1)
        .unwrap();
    descriptors
        .set_local(1, 2, 8, "names".into(), Some("Ljava/util/List;".into()), None, 2)
        .unwrap();
    let descriptors = descriptors.freeze();

    let mut signatures = LocalVariableListBuilder::new(2);
    signatures
        .set_local(
            0,
            2,
            8,
            "names".into(),
            None,
            Some("Ljava/util/List<Ljava/lang/String;>;".into()),
            2,
        )
        .unwrap();
    signatures
        .set_local(1, 20, 4, "gone".into(), None, Some("TT;".into()), 3)
        .unwrap();
    let signatures = signatures.freeze();

    let merged = LocalVariableList::merge_descriptors_and_signatures(&descriptors, &signatures);

    println!("Locals:");
    for local in merged.iter().flatten() {
        println!(
            "    [{:>3}, {:>3})  slot {:<3} {:<8} {}",
            local.start_pc(),
            local.end_pc(),
            local.index(),
            local.name(),
            describe(local)
        );
    }
    println!();

    for (pc, index) in [(0, 1), (9, 1), (10, 1), (5, 2), (5, 3)] {
        match merged.pc_and_index_to_local(pc, index) {
            Some(local) => println!("pc {:>3} slot {}: {}", pc, index, local.local_item()),
            None => log::warn!("pc {} slot {}: no local variable", pc, index),
        }
    }
}

fn describe(local: &LocalVariable) -> String {
    match (local.ty(), local.signature()) {
        (Ok(ty), Some(signature)) => format!("{} ({})", ty, signature),
        (Ok(ty), None) => ty.to_string(),
        (Err(e), _) => e.to_string(),
    }
}
