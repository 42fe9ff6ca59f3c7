use crate::category::application::domain::entities::Category;
use crate::shared::listing::ListService;

pub type ListCategoriesService<R> = ListService<Category, R>;
