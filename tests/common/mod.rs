// Shared fixtures for codecoach integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary Python project.
pub struct Project {
    pub dir: TempDir,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.write(name, content);
        self
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

pub const GUI_APP: &str = "\
import tkinter as tk

class App(tk.Frame):
    def on_click(self):
        self.label.config(text=\"clicked\")
";

pub const NET_WORKER: &str = "\
import threading
import requests

def fetch(url):
    return requests.get(url, timeout=5)

def start(url):
    worker = threading.Thread(target=fetch, args=(url,))
    worker.start()
";

pub const MATH_ONLY: &str = "\
import math

def area(r):
    return math.pi * r * r
";

pub const BROKEN: &str = "\
import json

def broken(:
    pass
";
