use crate::{
    arrays, closures, conditional, embedding, functions, interfaces, loops, maps, pointers, range,
    structs, switch, variadic, Context, Snippet,
};
use primer_common::{PrimerError, Result, Topic, Transcript};
use tracing::debug;

/// Registry of snippets, kept in lesson order.
pub struct Catalog {
    snippets: Vec<Box<dyn Snippet>>,
}

impl Catalog {
    /// A catalog holding every built-in snippet.
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        catalog.register(Box::new(loops::Loops));
        catalog.register(Box::new(conditional::Conditional));
        catalog.register(Box::new(switch::Switch));
        catalog.register(Box::new(arrays::Arrays));
        catalog.register(Box::new(maps::Maps));
        catalog.register(Box::new(range::Range));
        catalog.register(Box::new(functions::Functions));
        catalog.register(Box::new(variadic::Variadic));
        catalog.register(Box::new(closures::Closures));
        catalog.register(Box::new(pointers::Pointers));
        catalog.register(Box::new(structs::Structs));
        catalog.register(Box::new(embedding::Embedding));
        catalog.register(Box::new(interfaces::Interfaces));
        catalog
    }

    pub fn empty() -> Self {
        Self {
            snippets: Vec::new(),
        }
    }

    /// Add a snippet, replacing any already registered for its topic.
    pub fn register(&mut self, snippet: Box<dyn Snippet>) {
        let topic = snippet.topic();
        self.snippets.retain(|s| s.topic() != topic);
        let at = self.snippets.partition_point(|s| s.topic() < topic);
        self.snippets.insert(at, snippet);
    }

    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.snippets.iter().map(|s| s.topic())
    }

    pub fn get(&self, topic: Topic) -> Option<&dyn Snippet> {
        self.snippets
            .iter()
            .find(|s| s.topic() == topic)
            .map(|s| &**s)
    }

    /// Run one snippet and return what it wrote.
    pub fn run(&self, topic: Topic, ctx: &Context) -> Result<Transcript> {
        let snippet = self
            .get(topic)
            .ok_or_else(|| PrimerError::unknown_topic(topic.slug()))?;
        Ok(execute(snippet, ctx))
    }

    /// Run the given topics in the order given.
    pub fn run_selected(&self, topics: &[Topic], ctx: &Context) -> Result<Vec<(Topic, Transcript)>> {
        topics
            .iter()
            .map(|&topic| Ok((topic, self.run(topic, ctx)?)))
            .collect()
    }

    /// Run every registered snippet in lesson order.
    pub fn run_all(&self, ctx: &Context) -> Vec<(Topic, Transcript)> {
        self.snippets
            .iter()
            .map(|snippet| (snippet.topic(), execute(&**snippet, ctx)))
            .collect()
    }
}

fn execute(snippet: &dyn Snippet, ctx: &Context) -> Transcript {
    let topic = snippet.topic();
    debug!(topic = %topic.label(), "running snippet");
    let mut out = Transcript::new();
    snippet.run(ctx, &mut out);
    debug!(topic = %topic.label(), lines = out.len(), open = out.is_open(), "snippet finished");
    out
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
