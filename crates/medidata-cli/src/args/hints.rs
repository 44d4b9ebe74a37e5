pub mod cmd {
    // Patient commands
    pub const PATIENT_LIST: &str = "medidata patient list";
    pub const PATIENT_SHOW: &str = "medidata patient show --index <N>";
    pub const PATIENT_SHOW_FILE: &str = "medidata patient show --file <PATH>";

    // Taxonomy commands
    pub const TAXONOMY_LIST: &str = "medidata taxonomy list";

    // Sync commands
    pub const SYNC_RUN: &str = "medidata sync run --token <TOKEN>";

    // Webhook commands
    pub const WEBHOOK_PAYLOAD: &str = "medidata webhook payload";
    pub const WEBHOOK_DRY_RUN: &str = "medidata webhook send --dry-run";

    // Config commands
    pub const CONFIG_INIT: &str = "medidata config init";
    pub const CONFIG_INIT_FORCE: &str = "medidata config init --force";
}

pub mod fmt {
    pub fn patient_show_card(index: usize, label: &str) -> String {
        format!("medidata patient show --index {} --card \"{}\"", index, label)
    }

    pub fn sync_run_with(force_syncs: u32) -> String {
        format!("medidata sync run --token <TOKEN> --force-syncs {}", force_syncs)
    }
}
