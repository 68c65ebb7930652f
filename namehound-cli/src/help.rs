//! The user-facing help block.

/// The complete help text, printed verbatim.
///
/// Tab-aligned by hand; the option list names the keys the downstream
/// scanner understands, though the resolver itself accepts any key.
const HELP_TEXT: &str = "
[NameHound:Help ~]::

Usage: namehound <username1> <username2> ... [options]

Options (prefix with - or /):
\thelp\t\t\tDisplay this help message
\tstdin:<path>\t\tSpecify a file containing usernames (default: None)
\tstdout:<format>\t\tSpecify output format (default[stdout], json, txt, pipe)
\toutput_path:<path>\tSpecify output file path (default: namehound_scan_results.<format>)
\tverbose\t\t\tEnable verbose output (only for stdout=default)
\tdebug\t\t\tEnable debug output (only for stdout=default/txt)
\tplugin-config:<config>\tSpecify plugin configuration in the format ( plugin=setting1,setting2+plugin2=setting3 )
";

/// Print the help block to stdout.
pub fn print_help() {
    println!("{HELP_TEXT}");
}
