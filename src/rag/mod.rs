// RAG (Retrieval-Augmented Generation) pipeline
//
// One query against one document: chunk the text, embed the chunks,
// rank them against the query by cosine similarity, and feed the top
// matches to the text-generation endpoint.
//
// Components:
// - Chunker: bounded-size passages from raw text
// - Embedder: text -> fixed-length vector via the remote service
// - Retriever: brute-force top-k cosine ranking
// - Generator: context-grounded answer from the generation endpoint
// - Pipeline: end-to-end orchestration

pub mod chunker;
pub mod embedder;
pub mod generator;
pub mod pipeline;
pub mod retriever;

// Re-export key types
pub use chunker::Passage;
pub use embedder::{embed_batch_buffered, Embedder, TitanEmbedder};
pub use generator::{Generator, TitanGenerator};
pub use pipeline::{DocumentCorpus, PipelineConfig, RagPipeline};
pub use retriever::{cosine_similarity, top_k, RankedResult};
