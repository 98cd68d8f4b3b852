#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonType {
    Create,
}

impl ButtonType {
    fn color(&self) -> (&'static str, &'static str) {
        match self {
            // keep full color list including bg- and hover:bg- classes
            // else tailwind will not add them to css
            ButtonType::Create => ("bg-orange-600", "hover:bg-orange-700"),
        }
    }

    pub fn button_class(&self, is_disabled: bool) -> String {
        let (color_normal, color_hover) = self.color();
        if is_disabled {
            "inline-flex items-center px-3 bg-gray-300 text-white font-bold \
             py-2 rounded cursor-not-allowed"
                .to_string()
        } else {
            format!(
                "inline-flex items-center px-3 {} {} text-white font-bold \
                 py-2 rounded",
                color_normal, color_hover
            )
        }
    }
}
