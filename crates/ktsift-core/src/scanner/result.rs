use crate::model::Category;
use serde::Serialize;

/// Accumulated output of one scan. Category lists hold file base names in
/// traversal-visit order; a name appears at most once per list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub data_classes: Vec<String>,
    pub viewmodels: Vec<String>,
    pub screens: Vec<String>,
    pub total_files: usize,
    pub scanned_files: usize,
    pub skipped_files: usize,
}

impl ScanReport {
    pub fn push(&mut self, category: Category, file_name: String) {
        self.list_mut(category).push(file_name);
    }

    pub fn files(&self, category: Category) -> &[String] {
        match category {
            Category::DataClasses => &self.data_classes,
            Category::Viewmodels => &self.viewmodels,
            Category::Screens => &self.screens,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::DataClasses => &mut self.data_classes,
            Category::Viewmodels => &mut self.viewmodels,
            Category::Screens => &mut self.screens,
        }
    }

    pub fn matched_files(&self) -> usize {
        self.data_classes.len() + self.viewmodels.len() + self.screens.len()
    }
}
