mod directory;

pub(crate) use directory::DirectoryPage;
