//! Saves application preferences to a file, edits them, and loads them back.
//!
//! ```sh
//! cargo run --example preferences -- /tmp/prefs.json
//! ```

use chrono::{DateTime, Utc};
use prefsync::{load, save, serialize, Describe, Result, Synch};
use std::env;

#[derive(Default, Debug)]
struct Chapter {
    contents: String,
    author: String,
}

impl Describe for Chapter {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        synch.synch("contents", &mut self.contents)?;
        synch.synch("author", &mut self.author)?;
        Ok(())
    }
}

#[derive(Debug)]
struct Preferences {
    last_folder: String,
    last_open: u32,
    privileged: bool,
    saved_at: DateTime<Utc>,
    info: Chapter,
    chapters: Vec<Chapter>,
    draft: Option<Box<Chapter>>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            last_folder: String::new(),
            last_open: 0,
            privileged: false,
            saved_at: Utc::now(),
            info: Chapter::default(),
            chapters: Vec::new(),
            draft: None,
        }
    }
}

impl Describe for Preferences {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        synch.synch("last_folder", &mut self.last_folder)?;
        synch.synch("last_open", &mut self.last_open)?;
        synch.synch("privileged", &mut self.privileged)?;
        synch.synch("saved_at", &mut self.saved_at)?;
        synch.object("info", &mut self.info)?;
        synch.synch("chapters", &mut self.chapters)?;
        synch.synch("draft", &mut self.draft)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "preferences.json".to_string());

    let mut prefs = Preferences::default();
    if load(&mut prefs, &path)? {
        println!("Loaded {} chapter(s) from {}", prefs.chapters.len(), path);
    } else {
        println!("Nothing to load from {}, starting fresh", path);
    }

    prefs.last_folder = env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    prefs.last_open = prefs.chapters.len() as u32;
    prefs.saved_at = Utc::now();
    prefs.chapters.push(Chapter {
        contents: format!("Entry written at {}", prefs.saved_at),
        author: "demo".to_string(),
    });
    if prefs.draft.is_none() {
        prefs.draft = Some(Box::new(Chapter {
            contents: "Unfinished \"draft\"\nsecond line".to_string(),
            author: "demo".to_string(),
        }));
    }

    println!("{}", serialize(&mut prefs)?);
    save(&mut prefs, &path)?;
    println!("Saved to {}", path);
    Ok(())
}
