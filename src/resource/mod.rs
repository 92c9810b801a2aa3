pub mod folder;
pub mod gltf;
