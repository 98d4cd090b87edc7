pub struct TicketsServiceConfig {
    /// Public address of the application without trailing slash.
    /// Used to build shareable ticket links.
    pub base_url: String,
}
