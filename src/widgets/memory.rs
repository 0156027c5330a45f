use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use super::{FormControl, Modal, Region, TextInput};

/// An input that keeps its value in memory.
#[derive(Debug, Default)]
pub struct MemoryInput {
    initial: String,
    value: Mutex<String>,
}

impl MemoryInput {
    pub fn new(initial: impl Into<String>) -> Arc<Self> {
        let initial = initial.into();
        Arc::new(Self {
            value: Mutex::new(initial.clone()),
            initial,
        })
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.lock().unwrap() = value.into();
    }

    fn restore(&self) {
        self.set(self.initial.clone());
    }
}

impl TextInput for MemoryInput {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }
}

/// A form that resets the inputs it was built with.
#[derive(Debug, Default)]
pub struct MemoryForm {
    inputs: Vec<Arc<MemoryInput>>,
}

impl MemoryForm {
    pub fn new(inputs: Vec<Arc<MemoryInput>>) -> Arc<Self> {
        Arc::new(Self { inputs })
    }
}

impl FormControl for MemoryForm {
    fn reset(&self) {
        for input in &self.inputs {
            input.restore();
        }
    }
}

#[derive(Debug)]
pub struct MemoryModal {
    visible: AtomicBool,
}

impl MemoryModal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            visible: AtomicBool::new(true),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Modal for MemoryModal {
    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}

/// A banner region, hidden and empty until something is shown in it.
#[derive(Debug, Default)]
pub struct MemoryRegion {
    text: Mutex<String>,
    visible: AtomicBool,
}

impl MemoryRegion {
    pub fn new() -> Arc<Self> {
        Arc::default()
    }

    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Region for MemoryRegion {
    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}
