use std::sync::Arc;

use bone_renamer::host::{apply_renames, translate_bones};
use bone_renamer::{
    BoneHost, BoneSet, RenamePair, TokenDictionary, TranslationCache, Transliterator,
    compute_renames, format_formats,
};

#[test]
fn mmd_rig_converts_to_rigify_and_back() {
    let mut rig = BoneSet::new(["root", "neck", "head", "arm_L", "elbow_R", "fore2_L"]);
    let forward = compute_renames(&rig.identifier_set(), "mmd_english", "blender_rigify", true)
        .expect("known formats");
    assert!(forward.contains(&RenamePair::new("arm_L", "upper_arm.L")));
    assert!(forward.iter().all(|pair| pair.old != "root"));

    let report = apply_renames(&mut rig, &forward);
    assert_eq!(report.renamed.len(), forward.len());
    assert_eq!(report.skipped, 0);
    assert!(rig.contains("upper_arm.L"));

    let backward = compute_renames(&rig.identifier_set(), "blender_rigify", "mmd_english", true)
        .expect("known formats");
    apply_renames(&mut rig, &backward);
    assert_eq!(
        rig.names(),
        &["root", "neck", "head", "arm_L", "elbow_R", "fore2_L"]
    );
}

#[test]
fn show_formats_lists_every_key() {
    let listing = format_formats();
    let keys = listing
        .lines()
        .map(|line| line.split('\t').next().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(keys.len(), 12);
    assert_eq!(keys.first(), Some(&"mmd_english"));
    assert!(keys.contains(&"mmd_japaneseLR"));
}

#[tokio::test]
async fn japanese_rig_translates_offline() {
    let dictionary = Arc::new(TokenDictionary::load().expect("dictionary"));
    let transliterator = Transliterator::offline(dictionary, Arc::new(TranslationCache::new()));
    let mut rig = BoneSet::new(["全ての親", "左親指１", "右手首", "neck"]);

    let report = translate_bones(&transliterator, &rig.identifiers(), false, 3.0, 2).await;
    assert_eq!(report.dictionary, 3);
    assert_eq!(report.skipped, 1);

    apply_renames(&mut rig, &report.pairs);
    assert_eq!(rig.names(), &["ParentNode", "LeftThumb1", "RightWrist", "neck"]);
}
