//! Photo attachments and the three prompts of the meal flow.

use crate::chat::{ChatMessage, ContentPart, ImageDetail, ImageUrl, Prompt};

/// Number of meal ideas requested and kept.
pub const MEAL_COUNT: usize = 8;

const INGREDIENTS_TOKENS: u32 = 400;
const MEALS_TOKENS: u32 = 300;
const RECIPE_TOKENS: u32 = 600;

/// A photo encoded as a `data:image/...` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    name: String,
    data_url: String,
}

impl ImageAttachment {
    /// Wrap a data URL, or `None` when it does not carry an image.
    pub fn from_data_url(name: impl Into<String>, data_url: impl Into<String>) -> Option<Self> {
        let data_url = data_url.into();
        if !data_url.starts_with("data:image/") {
            return None;
        }
        Some(Self {
            name: name.into(),
            data_url,
        })
    }

    /// File name shown to the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full data URL.
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Media type, e.g. `image/jpeg`.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        let rest = &self.data_url["data:".len()..];
        rest.split([';', ',']).next().unwrap_or(rest)
    }
}

/// Photos selected for analysis, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<ImageAttachment>,
}

impl ImageSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a photo.
    pub fn push(&mut self, image: ImageAttachment) {
        self.images.push(image);
    }

    /// Add a photo from a data URL; non-image URLs are ignored. Returns
    /// whether it was added.
    pub fn add_data_url(&mut self, name: impl Into<String>, data_url: impl Into<String>) -> bool {
        match ImageAttachment::from_data_url(name, data_url) {
            Some(image) => {
                self.images.push(image);
                true
            }
            None => false,
        }
    }

    /// Remove the photo at `index`.
    pub fn remove(&mut self, index: usize) -> Option<ImageAttachment> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Number of photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no photos are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Photos in order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageAttachment> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a ImageAttachment;
    type IntoIter = std::slice::Iter<'a, ImageAttachment>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Ask for a comma-separated ingredient list from the photos.
#[must_use]
pub fn ingredients_prompt(images: &ImageSet) -> Prompt {
    let mut parts: Vec<ContentPart> = images
        .iter()
        .map(|image| ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: image.data_url().to_string(),
                detail: Some(ImageDetail::Low),
            },
        })
        .collect();
    parts.push(ContentPart::Text {
        text: "Look at these photos of my fridge and cupboards. List all the food \
               ingredients you can identify. Be concise, just a comma-separated list of \
               ingredients, nothing else."
            .to_string(),
    });
    Prompt {
        max_tokens: INGREDIENTS_TOKENS,
        messages: vec![ChatMessage::user_parts(parts)],
    }
}

/// Ask for meal ideas as a JSON array of names.
#[must_use]
pub fn meals_prompt(ingredients: &str) -> Prompt {
    Prompt {
        max_tokens: MEALS_TOKENS,
        messages: vec![ChatMessage::user_text(format!(
            "I have these ingredients: {ingredients}. Give me exactly {MEAL_COUNT} meal ideas \
             I can make (or mostly make) with these. Reply with ONLY a JSON array of meal name \
             strings, nothing else. Example: [\"Pasta Carbonara\",\"Fried Rice\"]"
        ))],
    }
}

/// Ask for a short markdown recipe for `meal`.
#[must_use]
pub fn recipe_prompt(meal: &str) -> Prompt {
    Prompt {
        max_tokens: RECIPE_TOKENS,
        messages: vec![ChatMessage::user_text(format!(
            "Give me a recipe for \"{meal}\" using ingredients I likely have on hand. Format \
             your response in markdown with: the meal name as an H3, a short intro, an \
             Ingredients H4 with a bullet list, and a Steps H4 with a numbered list. Keep it \
             concise and practical."
        ))],
    }
}
