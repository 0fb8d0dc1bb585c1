//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# glarea configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[shaders]
# vertex = "/glarea/v.glsl"
# fragment = "/glarea/f.glsl"
# directory = "/path/to/shaders"   # read sources from disk instead of the built-in ones

[render]
# clear_color = [0.1, 0.1, 0.1, 1.0]   # RGBA, each 0.0-1.0

[rotation]
# x = 0.0    # degrees
# y = 0.0
# z = 0.0

[logging]
# level = "info"   # trace, debug, info, warn, error
"##
    .to_string()
}
