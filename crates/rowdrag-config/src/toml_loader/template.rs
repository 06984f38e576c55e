//! Default TOML template with inline documentation comments.

/// Generate the template content. Every option is commented out, so the
/// file parses to an empty layer until edited.
pub(crate) fn default_config_toml() -> String {
    r##"# Row reorder host-wide defaults
# Only override what you want to change -- missing fields use built-in defaults.
# Per-table options are layered on top of these.

# data_src = 0                 # array index, or dotted path such as "meta.position"
# enable = true                # allow new drags to start
# selector = "td:first-child"  # element inside a row that starts a drag
# excluded_children = "a"      # elements inside the selector that never start a drag
# snap_x = false               # false = free, true = locked, number = fixed offset in px
# update = true                # write swapped values back into row data on drop
# cancelable = false           # ESC and drop-outside-body cancel the drag

# [form_options]               # passed verbatim to the submission collaborator
# submit = "changed"
"##
    .to_string()
}
