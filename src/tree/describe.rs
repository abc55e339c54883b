use colored::Colorize;

use crate::tree::node::Folder;
use crate::tree::path_tree::PathTree;

enum Paint {
    Structure,
    Folder,
    File,
}

fn push_styled(out: &mut String, text: &str, paint: Paint, colorize: bool) {
    if !colorize {
        out.push_str(text);
        return;
    }

    let painted = match paint {
        Paint::Structure => text.dimmed(),
        Paint::Folder => text.bright_black(),
        Paint::File => text.bold(),
    };
    out.push_str(&painted.to_string());
}

impl PathTree {
    /// Renders the tree as box-drawing ASCII art (` ├`, ` └`, ` │`, `─`).
    ///
    /// At each folder: child folders first, each followed by its own subtree,
    /// then child files. The root renders as `./`. When `write_to_stdout` is
    /// set the rendered string is also printed.
    pub fn describe(&self, write_to_stdout: bool, colorize: bool) -> String {
        let mut out = String::new();
        push_styled(&mut out, ".", Paint::Folder, colorize);
        push_styled(&mut out, "/", Paint::Structure, colorize);

        let mut last_flags = Vec::new();
        Self::describe_folder(self.root(), 1, &mut last_flags, &mut out, colorize);

        if write_to_stdout {
            println!("{out}");
        }

        out
    }

    fn describe_folder(
        folder: &Folder,
        depth: usize,
        last_flags: &mut Vec<bool>,
        out: &mut String,
        colorize: bool,
    ) {
        let folder_count = folder.folders().len();
        let file_count = folder.files().len();

        for (index, child) in folder.folders().values().enumerate() {
            // A folder is the last sibling only when no files render below it.
            let is_last = index + 1 == folder_count && file_count == 0;

            out.push('\n');
            Self::push_connectors(out, depth, is_last, last_flags, colorize);
            push_styled(out, "─", Paint::Structure, colorize);
            push_styled(out, &format!("{}/", child.name()), Paint::Folder, colorize);

            last_flags.push(is_last);
            Self::describe_folder(child, depth + 1, last_flags, out, colorize);
            last_flags.pop();
        }

        for (index, file) in folder.files().values().enumerate() {
            let is_last = index + 1 == file_count;

            out.push('\n');
            Self::push_connectors(out, depth, is_last, last_flags, colorize);
            push_styled(out, "─", Paint::Structure, colorize);
            push_styled(out, file.name(), Paint::File, colorize);
        }
    }

    // One two-character cell per depth level: a connector on the entry's own
    // level, a continuation bar or blank padding on every ancestor level.
    fn push_connectors(
        out: &mut String,
        depth: usize,
        is_last: bool,
        last_flags: &[bool],
        colorize: bool,
    ) {
        for level in 0..depth {
            if level + 1 == depth {
                let connector = if is_last { " └" } else { " ├" };
                push_styled(out, connector, Paint::Structure, colorize);
            } else if last_flags[level] {
                push_styled(out, "  ", Paint::Structure, colorize);
            } else {
                push_styled(out, " │", Paint::Structure, colorize);
            }
        }
    }
}
